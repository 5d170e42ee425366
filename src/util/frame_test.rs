use super::*;

#[test]
fn first_request_in_a_tick_is_admitted() {
    let mut gate = FrameGate::new();
    assert!(gate.try_begin());
}

#[test]
fn repeat_requests_are_coalesced_until_the_frame_runs() {
    let mut gate = FrameGate::new();
    assert!(gate.try_begin());
    assert!(!gate.try_begin());
    assert!(!gate.try_begin());
}

#[test]
fn finish_rearms_the_gate() {
    let mut gate = FrameGate::new();
    assert!(gate.try_begin());
    gate.finish();
    assert!(gate.try_begin());
}

#[test]
fn burst_of_events_yields_one_frame_per_tick() {
    let mut gate = FrameGate::new();
    let mut frames = 0;
    for tick in 0..3 {
        for _ in 0..10 {
            if gate.try_begin() {
                frames += 1;
            }
        }
        gate.finish();
        assert_eq!(frames, tick + 1);
    }
}
