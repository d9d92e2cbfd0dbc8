use std::cell::Cell;
use std::rc::Rc;

use scrollgraph_charts::prelude::*;

/// x = 10 px per index, y = 300 - value
struct Layout {
    redraws: Rc<Cell<usize>>,
}

impl DrawingDelegate for Layout {
    fn calculate_position(&self, index: usize, value: f64) -> Point {
        Point::new(index as f32 * 10.0, 300.0 - value as f32)
    }

    fn update_paths(&mut self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}

fn plot(config: PlotConfig) -> (Plot, Rc<Cell<usize>>) {
    let redraws = Rc::new(Cell::new(0));
    let layout = Layout {
        redraws: redraws.clone(),
    };
    (Plot::new(config, Box::new(layout)).unwrap(), redraws)
}

fn expected(index: usize, value: f64) -> Point {
    Point::new(index as f32 * 10.0, 300.0 - value as f32)
}

#[test]
fn create_points_positions_every_index_for_initial_value() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.create_points(5, 0.0);

    for i in 0..5 {
        assert_eq!(plot.point(i).unwrap(), expected(i, 0.0));
    }
    assert_eq!(plot.active_animations(), 0);
}

#[test]
fn set_positions_applies_directly_without_animating() {
    let (mut plot, redraws) = plot(PlotConfig::new("one"));
    plot.create_points(13, 0.0);

    plot.set_positions(10..13, &[5.0, 6.0, 7.0]).unwrap();
    assert_eq!(plot.point(10).unwrap(), expected(10, 5.0));
    assert_eq!(plot.point(11).unwrap(), expected(11, 6.0));
    assert_eq!(plot.point(12).unwrap(), expected(12, 7.0));
    assert_eq!(plot.active_animations(), 0);
    assert_eq!(plot.scheduler_state(), SchedulerState::Idle);
    assert_eq!(redraws.get(), 0);
}

#[test]
fn set_positions_creates_points_entering_the_window() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.set_positions([20, 21], &[1.0, 2.0]).unwrap();
    assert_eq!(plot.point(21).unwrap(), expected(21, 2.0));
}

#[test]
fn animate_to_positions_staggers_delays_and_is_deferred() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.set_positions(10..13, &[0.0, 0.0, 0.0]).unwrap();

    let ids = plot
        .animate_to_positions(10..13, &[5.0, 6.0, 7.0], 0.1)
        .unwrap();
    assert_eq!(ids.len(), 3);
    assert_eq!(plot.active_animations(), 3);
    assert_eq!(plot.scheduler_state(), SchedulerState::Running);

    let delays: Vec<f32> = ids
        .iter()
        .map(|id| plot.animation(*id).unwrap().delay())
        .collect();
    assert_eq!(delays[0], 0.0);
    assert!((delays[1] - 0.1).abs() < 1e-6);
    assert!((delays[2] - 0.2).abs() < 1e-6);

    // Nothing moves until a frame is delivered
    for (i, index) in (10..13).enumerate() {
        assert_eq!(plot.point(index).unwrap(), expected(index, 0.0), "#{i}");
    }
}

#[test]
fn animate_to_positions_on_missing_point_enqueues_nothing() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.create_points(3, 0.0);

    let err = plot
        .animate_to_positions([1, 2, 3], &[1.0, 2.0, 3.0], 0.0)
        .unwrap_err();
    assert_eq!(err, GraphError::MissingPoint { index: 3 });
    assert_eq!(plot.active_animations(), 0);
    assert_eq!(plot.scheduler_state(), SchedulerState::Idle);
}

#[test]
fn animate_to_positions_rejects_arity_mismatch() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.create_points(3, 0.0);
    let err = plot.animate_to_positions(0..3, &[1.0], 0.0).unwrap_err();
    assert_eq!(
        err,
        GraphError::ArityMismatch {
            indices: 3,
            values: 1
        }
    );
    assert_eq!(plot.active_animations(), 0);
}

#[test]
fn frames_drive_points_to_their_targets_and_go_idle() {
    let (mut plot, redraws) = plot(PlotConfig::new("one").with_duration(0.5));
    plot.create_points(4, 0.0);
    plot.animate_to_positions(0..4, &[10.0, 20.0, 30.0, 40.0], 0.05)
        .unwrap();

    let mut timestamp = 100.0;
    let mut frames = 0;
    while plot.wants_frames() {
        plot.on_frame(timestamp);
        timestamp += 1.0 / 60.0;
        frames += 1;
        assert!(frames < 1_000, "animation never settled");
    }

    for (i, value) in [10.0, 20.0, 30.0, 40.0].into_iter().enumerate() {
        assert_eq!(plot.point(i).unwrap(), expected(i, value));
    }
    assert_eq!(plot.scheduler_state(), SchedulerState::Idle);
    assert_eq!(redraws.get(), frames);
}

#[test]
fn long_frame_gap_is_clamped() {
    let config = PlotConfig::new("one")
        .with_duration(1.0)
        .with_custom_easing(|t| t);
    let (mut plot, _) = plot(config);
    plot.create_points(1, 0.0);
    plot.animate_to_positions([0], &[100.0], 0.0).unwrap();

    plot.on_frame(0.0);
    plot.on_frame(0.5);

    // 32ms of a linear 1s animation from y=300 to y=200
    let y = plot.point(0).unwrap().y;
    assert!((y - (300.0 - 3.2)).abs() < 1e-3, "y = {y}");
}

#[test]
fn reset_empties_points_and_animations() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.create_points(5, 0.0);
    plot.animate_to_positions(0..5, &[1.0; 5], 0.0).unwrap();

    plot.reset();
    assert_eq!(plot.active_animations(), 0);
    assert_eq!(plot.scheduler_state(), SchedulerState::Idle);
    for i in 0..5 {
        assert_eq!(plot.point(i), Err(GraphError::MissingPoint { index: i }));
    }
    // Idle, so frames are inert even though the driver is attached
    assert!(!plot.wants_frames());
    assert!(!plot.on_frame(0.5));

    // Animating again resumes frames without a start()
    plot.create_points(2, 0.0);
    plot.animate_to_positions(0..2, &[1.0, 2.0], 0.0).unwrap();
    assert!(plot.wants_frames());
    assert!(plot.on_frame(1.0));
}

#[test]
fn stop_cancels_without_snapping() {
    let config = PlotConfig::new("one")
        .with_duration(1.0)
        .with_custom_easing(|t| t);
    let (mut plot, _) = plot(config);
    plot.create_points(1, 0.0);
    plot.animate_to_positions([0], &[100.0], 0.0).unwrap();
    plot.step(0.25);
    let midway = plot.point(0).unwrap();

    plot.stop();
    assert_eq!(plot.point(0).unwrap(), midway);
    assert_eq!(plot.active_animations(), 0);
}

#[test]
fn invalidate_detaches_frame_driver_until_started() {
    let (mut plot, _) = plot(PlotConfig::new("one"));
    plot.invalidate();
    assert!(plot.points().is_empty());

    plot.create_points(1, 0.0);
    plot.animate_to_positions([0], &[50.0], 0.0).unwrap();
    assert!(plot.is_animating());
    assert!(!plot.wants_frames());
    assert!(!plot.on_frame(0.0));

    plot.start();
    assert!(plot.wants_frames());
    assert!(plot.on_frame(0.1));
}

#[test]
fn elastic_plot_overshoots_then_settles() {
    let config = PlotConfig::new("two")
        .with_duration(1.0)
        .with_animation_type(AnimationType::Elastic);
    let (mut plot, _) = plot(config);
    plot.create_points(1, 0.0);
    plot.animate_to_positions([0], &[100.0], 0.0).unwrap();

    // Target y is 200; elastic easing travels past it
    let mut lowest = f32::MAX;
    while plot.is_animating() {
        plot.step(0.01);
        lowest = lowest.min(plot.point(0).unwrap().y);
    }
    assert!(lowest < 200.0);
    assert_eq!(plot.point(0).unwrap(), expected(0, 100.0));
}
