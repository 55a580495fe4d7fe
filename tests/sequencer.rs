use chrono::{DateTime, Duration, TimeZone, Utc};
use timesplit::config::SplitterConfig;
use timesplit::error::TimesplitError;
use timesplit::splitter::WindowSequencer;
use timesplit::types::{Frequency, SplitMode, SplitState, WindowType};

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
}

fn daily_config(
    train_size: u32,
    forecast_horizon: u32,
    gap: u32,
    stride: Option<u32>,
    window: WindowType,
    mode: SplitMode,
) -> SplitterConfig {
    SplitterConfig {
        frequency: Frequency::Days,
        train_size,
        forecast_horizon,
        gap,
        stride,
        window,
        mode,
    }
}

#[test]
fn test_ten_day_boundary_scenario() {
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        0,
        None,
        WindowType::Rolling,
        SplitMode::Forward,
    ))
    .unwrap();

    let splits: Vec<SplitState> = sequencer.generate(day(0), day(10)).unwrap().collect();

    assert_eq!(splits.len(), 3);
    assert_eq!(
        splits[0],
        SplitState::new(day(0), day(4), day(4), day(7))
    );
    assert_eq!(
        splits[1],
        SplitState::new(day(3), day(7), day(7), day(10))
    );
    // Forecast tail runs past the range end, by design
    assert_eq!(
        splits[2],
        SplitState::new(day(6), day(10), day(10), day(13))
    );
}

#[test]
fn test_gap_offsets_forecast_window() {
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        2,
        Some(2),
        WindowType::Rolling,
        SplitMode::Forward,
    ))
    .unwrap();

    let splits: Vec<SplitState> = sequencer.generate(day(0), day(10)).unwrap().collect();

    assert_eq!(splits[0], SplitState::new(day(0), day(4), day(6), day(9)));
    for state in &splits {
        assert_eq!(state.forecast_start - state.train_end, Duration::days(2));
    }
}

#[test]
fn test_expanding_window_scenario() {
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        2,
        Some(2),
        WindowType::Expanding,
        SplitMode::Forward,
    ))
    .unwrap();

    let splits: Vec<SplitState> = sequencer.generate(day(0), day(10)).unwrap().collect();

    let mut previous_span = Duration::zero();
    for state in &splits {
        assert_eq!(state.train_start, day(0));
        assert!(state.train_span() > previous_span);
        previous_span = state.train_span();
    }
    assert_eq!(
        splits.last().unwrap().train_span() - splits.first().unwrap().train_span(),
        Duration::days(2) * (splits.len() as i32 - 1)
    );
}

#[test]
fn test_default_stride_tiles_the_range() {
    // stride defaulting to forecast_horizon keeps consecutive forecast
    // windows adjacent and non-overlapping
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        0,
        None,
        WindowType::Rolling,
        SplitMode::Forward,
    ))
    .unwrap();

    let splits: Vec<SplitState> = sequencer.generate(day(0), day(30)).unwrap().collect();
    for pair in splits.windows(2) {
        assert_eq!(pair[0].forecast_end, pair[1].forecast_start);
    }
}

#[test]
fn test_count_agrees_with_generate_across_modes() {
    for window in [WindowType::Rolling, WindowType::Expanding] {
        for mode in [SplitMode::Forward, SplitMode::Backward] {
            let sequencer =
                WindowSequencer::new(daily_config(4, 3, 1, Some(2), window, mode)).unwrap();
            let generated = sequencer.generate(day(0), day(25)).unwrap().count();
            assert_eq!(sequencer.count(day(0), day(25)).unwrap(), generated);
        }
    }
}

#[test]
fn test_backward_emits_latest_first() {
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        0,
        Some(3),
        WindowType::Rolling,
        SplitMode::Backward,
    ))
    .unwrap();

    let splits: Vec<SplitState> = sequencer.generate(day(0), day(10)).unwrap().collect();

    assert_eq!(splits[0], SplitState::new(day(3), day(7), day(7), day(10)));
    assert_eq!(splits[1], SplitState::new(day(0), day(4), day(4), day(7)));

    // Reversing recovers chronological order
    let mut chronological = splits.clone();
    chronological.reverse();
    for pair in chronological.windows(2) {
        assert!(pair[0].train_start < pair[1].train_start);
    }
}

#[test]
fn test_longer_windows_never_add_splits() {
    let range_end = day(40);
    let mut previous = usize::MAX;
    for train_size in [2, 4, 8, 16, 32] {
        let sequencer = WindowSequencer::new(daily_config(
            train_size,
            3,
            0,
            None,
            WindowType::Rolling,
            SplitMode::Forward,
        ))
        .unwrap();
        let count = sequencer.count(day(0), range_end).unwrap();
        assert!(count <= previous);
        previous = count;
    }
}

#[test]
fn test_invalid_range_fails_before_iteration() {
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        0,
        None,
        WindowType::Rolling,
        SplitMode::Forward,
    ))
    .unwrap();

    assert!(matches!(
        sequencer.generate(day(3), day(3)),
        Err(TimesplitError::InvalidRange(_))
    ));
    assert!(matches!(
        sequencer.generate(day(4), day(3)),
        Err(TimesplitError::InvalidRange(_))
    ));
    assert!(matches!(
        sequencer.count(day(4), day(3)),
        Err(TimesplitError::InvalidRange(_))
    ));
}

#[test]
fn test_invalid_config_fails_at_construction() {
    let result = WindowSequencer::new(daily_config(
        0,
        3,
        0,
        None,
        WindowType::Rolling,
        SplitMode::Forward,
    ));
    assert!(matches!(result, Err(TimesplitError::Configuration(_))));

    let result = WindowSequencer::new(daily_config(
        4,
        0,
        0,
        None,
        WindowType::Rolling,
        SplitMode::Forward,
    ));
    assert!(matches!(result, Err(TimesplitError::Configuration(_))));
}

#[test]
fn test_sequencer_is_reusable_across_ranges() {
    let sequencer = WindowSequencer::new(daily_config(
        4,
        3,
        0,
        None,
        WindowType::Rolling,
        SplitMode::Forward,
    ))
    .unwrap();

    assert_eq!(sequencer.count(day(0), day(10)).unwrap(), 3);
    assert_eq!(sequencer.count(day(100), day(110)).unwrap(), 3);
    assert_eq!(sequencer.count(day(0), day(10)).unwrap(), 3);
}

#[test]
fn test_weekly_frequency_scales_boundaries() {
    let sequencer = WindowSequencer::new(SplitterConfig {
        frequency: Frequency::Weeks,
        train_size: 4,
        forecast_horizon: 1,
        gap: 0,
        stride: None,
        window: WindowType::Rolling,
        mode: SplitMode::Forward,
    })
    .unwrap();

    let splits: Vec<SplitState> = sequencer.generate(day(0), day(70)).unwrap().collect();

    assert_eq!(splits[0].train_span(), Duration::weeks(4));
    assert_eq!(splits[0].forecast_span(), Duration::weeks(1));
    for pair in splits.windows(2) {
        assert_eq!(pair[1].train_start - pair[0].train_start, Duration::weeks(1));
    }
}
