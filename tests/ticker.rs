mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use embassy_time::Duration;
    use hikari_slab::color::Rgb;
    use hikari_slab::timer::uptime_ms;
    use hikari_slab::{Event, EventKind, Notifier, SlabError, SlabGraph, SlabId, SlabSlot, Ticker};

    type Seen = Arc<Mutex<Vec<Event>>>;

    fn ticker_with_sink(period_ms: u64) -> (SlabGraph, SlabId, Seen) {
        let mut graph = SlabGraph::new();
        let ticker = graph
            .insert(Ticker::new(Duration::from_millis(period_ms)).unwrap())
            .unwrap();

        let seen: Seen = Arc::default();
        let log = Arc::clone(&seen);
        let sink = graph
            .insert(Notifier::new(move |event: &Event| {
                log.lock().unwrap().push(event.clone());
            }))
            .unwrap();
        graph.connect(sink, ticker);

        (graph, ticker, seen)
    }

    fn count(seen: &Seen, kind: EventKind) -> usize {
        seen.lock()
            .unwrap()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    #[test]
    fn test_zero_period_is_rejected() {
        assert!(matches!(
            Ticker::new(Duration::from_ticks(0)),
            Err(SlabError::InvalidPeriod)
        ));
    }

    #[test]
    fn test_ticker_is_armed_on_insert() {
        let ticker = Ticker::new(Duration::from_millis(10)).unwrap();
        assert!(!ticker.is_armed());

        let mut graph = SlabGraph::new();
        let id = graph.insert(ticker).unwrap();
        let Some(SlabSlot::Ticker(ticker)) = graph.get(id) else {
            panic!("ticker slab expected");
        };
        assert!(ticker.is_armed());
        assert_eq!(ticker.period(), Duration::from_millis(10));
    }

    #[test]
    fn test_ticks_reach_children() {
        let (mut graph, _, seen) = ticker_with_sink(10);
        let start = uptime_ms();

        graph.run_for(Duration::from_millis(200));

        let ticks = count(&seen, EventKind::Tick);
        assert!((5..=25).contains(&ticks), "ticks={ticks}");

        let times: Vec<u32> = seen.lock().unwrap().iter().filter_map(Event::time).collect();
        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(times[0] >= start);
    }

    #[test]
    fn test_tick_input_is_swallowed() {
        let (mut graph, ticker, seen) = ticker_with_sink(1000);

        graph.stimulate(ticker, Event::tick(5));
        graph.stimulate(ticker, Event::rgb(Rgb::new(1, 2, 3)));

        assert_eq!(count(&seen, EventKind::Tick), 0);
        assert_eq!(count(&seen, EventKind::Rgb), 1);
    }

    #[test]
    fn test_reset_drops_queued_ticks() {
        let (mut graph, ticker, seen) = ticker_with_sink(20);

        thread::sleep(std::time::Duration::from_millis(90));
        assert!(graph.pending() > 0);

        graph.stimulate(ticker, Event::reset());
        assert_eq!(graph.process_pending(), 0);
        assert_eq!(count(&seen, EventKind::Tick), 0);
        assert_eq!(count(&seen, EventKind::Reset), 1);

        // The timer keeps running after the restart
        graph.run_for(Duration::from_millis(150));
        assert!(count(&seen, EventKind::Tick) > 0);
    }

    #[test]
    fn test_period_restarts_after_reset_is_through() {
        let mut graph = SlabGraph::new();
        let ticker = graph
            .insert(Ticker::new(Duration::from_millis(20)).unwrap())
            .unwrap();
        let slow = graph
            .insert(Notifier::new(|event: &Event| {
                if event.kind() == EventKind::Reset {
                    thread::sleep(std::time::Duration::from_millis(70));
                }
            }))
            .unwrap();
        graph.connect(slow, ticker);

        graph.stimulate(ticker, Event::reset());

        // No tick may come due while the reset was still propagating
        assert_eq!(graph.process_pending(), 0);
        let Some(SlabSlot::Ticker(state)) = graph.get(ticker) else {
            panic!("ticker slab expected");
        };
        assert!(!state.is_suspended());
        assert!(state.is_armed());

        graph.run_for(Duration::from_millis(100));
        let Some(SlabSlot::Ticker(state)) = graph.get(ticker) else {
            panic!("ticker slab expected");
        };
        assert!(!state.is_suspended());
    }

    #[test]
    fn test_destroy_stops_ticks() {
        let (mut graph, ticker, seen) = ticker_with_sink(10);
        graph.run_for(Duration::from_millis(60));

        let Some(SlabSlot::Ticker(detached)) = graph.destroy(ticker) else {
            panic!("ticker slab expected");
        };
        assert!(!detached.is_armed());

        let before = count(&seen, EventKind::Tick);
        graph.run_for(Duration::from_millis(60));
        assert_eq!(count(&seen, EventKind::Tick), before);

        // A detached ticker is armed again when re-inserted
        let ticker = graph.insert(detached).unwrap();
        assert!(matches!(graph.get(ticker), Some(SlabSlot::Ticker(t)) if t.is_armed()));
    }

    #[test]
    fn test_tickers_share_one_worker() {
        let (mut first, _, first_seen) = ticker_with_sink(10);
        let (mut second, _, second_seen) = ticker_with_sink(15);

        let handle = thread::spawn(move || {
            second.run_for(Duration::from_millis(150));
            count(&second_seen, EventKind::Tick)
        });
        first.run_for(Duration::from_millis(150));

        assert!(count(&first_seen, EventKind::Tick) > 0);
        assert!(handle.join().unwrap() > 0);
    }
}
