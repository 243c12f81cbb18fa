//! Headless app tests for the poller hooks
//!
//! These run the real Bevy systems against a fake cursor and hand-spawned
//! monitor entities, without opening a window.

#[cfg(test)]
mod poller_app_tests {
    use crate::core::config::OverlaySettings;
    use crate::geometry::GlobalPoint;
    use crate::host::cursor::FixedProbe;
    use crate::host::monitors::test_monitor;
    use crate::host::CursorSource;
    use crate::poller::{PollInterval, PollState, PollTimer, PollerContext, PollerPlugin, PollerSet};
    use crate::ui::overlay::{OverlayLabel, OverlayPlugin};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::mouse::MouseMotion;
    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;
    use bevy::window::{PrimaryWindow, WindowPosition};
    use bevy::winit::{UpdateMode, WinitSettings};
    use std::time::Duration;

    /// Number of frames in which the label text was written
    #[derive(Resource, Default)]
    struct LabelWrites(u32);

    fn count_label_writes(
        labels: Query<(), (Changed<Text>, With<OverlayLabel>)>,
        mut writes: ResMut<LabelWrites>,
    ) {
        if !labels.is_empty() {
            writes.0 += 1;
        }
    }

    /// Periods long enough that the timer hook never fires during a test
    fn slow_clock_settings(fast_ms: u64, slow_ms: u64) -> OverlaySettings {
        OverlaySettings {
            fast_ms,
            slow_ms,
            ..default()
        }
    }

    fn build_poller_app(
        probe: &FixedProbe,
        settings: OverlaySettings,
        monitors: &[(IVec2, u32, u32)],
    ) -> App {
        let mut app = App::new();
        app.add_plugins(bevy::time::TimePlugin)
            .insert_resource(settings)
            .insert_resource(WinitSettings::default())
            .insert_non_send_resource(CursorSource::new(probe.clone()))
            .init_resource::<LabelWrites>()
            .add_plugins((OverlayPlugin, PollerPlugin))
            .add_systems(Update, count_label_writes.after(PollerSet));

        for &(position, width, height) in monitors {
            app.world_mut().spawn(test_monitor(position, width, height));
        }
        app.world_mut()
            .spawn((Window::default(), PrimaryWindow));
        app
    }

    fn poller_app(probe: &FixedProbe, settings: OverlaySettings, monitors: &[(IVec2, u32, u32)]) -> App {
        let mut app = build_poller_app(probe, settings, monitors);
        // Startup spawns the label; no motion yet, so nothing is sampled
        app.update();
        app
    }

    /// Like [`poller_app`], but every update advances the clock by `step`
    fn stepped_poller_app(
        probe: &FixedProbe,
        settings: OverlaySettings,
        monitors: &[(IVec2, u32, u32)],
        step: Duration,
    ) -> App {
        let mut app = build_poller_app(probe, settings, monitors);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
        // The first update only starts the clock
        app.update();
        app
    }

    fn poll_state(app: &App) -> &PollState {
        app.world().resource::<PollState>()
    }

    fn timer_period(app: &App) -> Duration {
        app.world().resource::<PollTimer>().0.duration()
    }

    fn sample_once(mut poller: PollerContext) {
        poller.sample_and_update();
    }

    fn sample(app: &mut App) {
        app.world_mut().run_system_once(sample_once).unwrap();
    }

    fn label_text(app: &mut App) -> String {
        let world = app.world_mut();
        let mut labels = world.query_filtered::<&Text, With<OverlayLabel>>();
        labels.single(world).unwrap().0.clone()
    }

    fn label_writes(app: &App) -> u32 {
        app.world().resource::<LabelWrites>().0
    }

    fn window_position(app: &mut App) -> WindowPosition {
        let world = app.world_mut();
        let mut windows = world.query_filtered::<&Window, With<PrimaryWindow>>();
        windows.single(world).unwrap().position
    }

    fn send_motion(app: &mut App) {
        app.world_mut().send_event(MouseMotion { delta: Vec2::X });
    }

    #[test]
    fn motion_event_updates_label() {
        let probe = FixedProbe::new(GlobalPoint::new(50, 50));
        let mut app = poller_app(
            &probe,
            slow_clock_settings(60_000, 180_000),
            &[(IVec2::ZERO, 1920, 1080)],
        );
        assert_eq!(label_text(&mut app), "");

        send_motion(&mut app);
        app.update();

        assert_eq!(label_text(&mut app), "Global: (50, 50)\nLocal: (50, 50)");
    }

    #[test]
    fn stationary_samples_never_touch_the_label() {
        let probe = FixedProbe::new(GlobalPoint::new(50, 50));
        let mut app = poller_app(
            &probe,
            slow_clock_settings(60_000, 180_000),
            &[(IVec2::ZERO, 1920, 1080)],
        );

        // The freshly spawned label counts once
        let spawned = label_writes(&app);

        send_motion(&mut app);
        app.update();
        assert_eq!(label_writes(&app), spawned + 1);

        for _ in 0..5 {
            send_motion(&mut app);
            app.update();
        }
        assert_eq!(label_writes(&app), spawned + 1);
        assert_eq!(label_text(&mut app), "Global: (50, 50)\nLocal: (50, 50)");
    }

    #[test]
    fn stationary_cursor_switches_timer_and_loop_to_slow() {
        // 60 s / 3720 s gives the default threshold of 62 with a clock that
        // never fires on its own during the test
        let probe = FixedProbe::new(GlobalPoint::new(50, 50));
        let mut app = poller_app(
            &probe,
            slow_clock_settings(60_000, 3_720_000),
            &[(IVec2::ZERO, 1920, 1080)],
        );

        sample(&mut app);
        for _ in 0..62 {
            sample(&mut app);
        }
        assert_eq!(app.world().resource::<PollState>().interval(), PollInterval::Fast);

        sample(&mut app);
        assert_eq!(app.world().resource::<PollState>().interval(), PollInterval::Slow);

        let timer = &app.world().resource::<PollTimer>().0;
        assert_eq!(timer.duration(), Duration::from_secs(3720));

        let winit = app.world().resource::<WinitSettings>();
        assert!(matches!(
            winit.focused_mode,
            UpdateMode::Reactive { wait, .. } if wait == Duration::from_secs(3720)
        ));
        assert!(matches!(
            winit.unfocused_mode,
            UpdateMode::Reactive { wait, .. } if wait == Duration::from_secs(3720)
        ));
    }

    #[test]
    fn poll_timer_drives_sampling_and_backoff() {
        let probe = FixedProbe::new(GlobalPoint::new(50, 50));
        let mut app = stepped_poller_app(
            &probe,
            OverlaySettings::default(),
            &[(IVec2::ZERO, 1920, 1080)],
            Duration::from_millis(16),
        );
        assert_eq!(label_text(&mut app), "");
        assert_eq!(poll_state(&app).last_local(), None);

        // First completed 16 ms period takes the initial sample
        app.update();
        assert_eq!(label_text(&mut app), "Global: (50, 50)\nLocal: (50, 50)");
        assert_eq!(poll_state(&app).idle_count(), 0);

        for _ in 0..62 {
            app.update();
        }
        assert_eq!(poll_state(&app).interval(), PollInterval::Fast);
        assert_eq!(poll_state(&app).idle_count(), 62);

        app.update();
        assert_eq!(poll_state(&app).interval(), PollInterval::Slow);
        assert_eq!(timer_period(&app), Duration::from_secs(1));
        assert!(matches!(
            app.world().resource::<WinitSettings>().focused_mode,
            UpdateMode::Reactive { wait, .. } if wait == Duration::from_secs(1)
        ));

        // Movement is only noticed once the full slow period has elapsed
        probe.set(GlobalPoint::new(70, 80));
        for _ in 0..62 {
            app.update();
        }
        assert_eq!(poll_state(&app).interval(), PollInterval::Slow);
        assert_eq!(label_text(&mut app), "Global: (50, 50)\nLocal: (50, 50)");

        app.update();
        assert_eq!(poll_state(&app).interval(), PollInterval::Fast);
        assert_eq!(timer_period(&app), Duration::from_millis(16));
        assert_eq!(label_text(&mut app), "Global: (70, 80)\nLocal: (70, 80)");

        // Back on the fast clock, the next period samples again
        probe.set(GlobalPoint::new(71, 80));
        app.update();
        assert_eq!(label_text(&mut app), "Global: (71, 80)\nLocal: (71, 80)");
    }

    #[test]
    fn movement_after_backoff_restores_fast_polling() {
        let probe = FixedProbe::new(GlobalPoint::new(10, 10));
        let mut app = poller_app(
            &probe,
            slow_clock_settings(60_000, 180_000),
            &[(IVec2::ZERO, 1920, 1080)],
        );

        for _ in 0..5 {
            sample(&mut app);
        }
        assert_eq!(app.world().resource::<PollState>().interval(), PollInterval::Slow);

        probe.set(GlobalPoint::new(20, 20));
        sample(&mut app);

        let state = app.world().resource::<PollState>();
        assert_eq!(state.interval(), PollInterval::Fast);
        assert_eq!(state.idle_count(), 0);
        assert_eq!(
            app.world().resource::<PollTimer>().0.duration(),
            Duration::from_secs(60)
        );
        assert_eq!(label_text(&mut app), "Global: (20, 20)\nLocal: (20, 20)");
    }

    #[test]
    fn overlay_follows_cursor_to_other_monitor() {
        let probe = FixedProbe::new(GlobalPoint::new(100, 100));
        let mut app = poller_app(
            &probe,
            slow_clock_settings(60_000, 180_000),
            &[(IVec2::ZERO, 1920, 1080), (IVec2::new(1920, -200), 2560, 1440)],
        );

        sample(&mut app);
        assert_eq!(window_position(&mut app), WindowPosition::At(IVec2::ZERO));

        probe.set(GlobalPoint::new(2000, 0));
        sample(&mut app);
        assert_eq!(
            window_position(&mut app),
            WindowPosition::At(IVec2::new(1920, -200))
        );
        assert_eq!(label_text(&mut app), "Global: (2000, 0)\nLocal: (80, 200)");
    }

    #[test]
    fn cursor_outside_every_monitor_is_ignored() {
        let probe = FixedProbe::new(GlobalPoint::new(30, 30));
        let mut app = poller_app(
            &probe,
            slow_clock_settings(60_000, 180_000),
            &[(IVec2::ZERO, 800, 600)],
        );

        sample(&mut app);
        sample(&mut app);
        let idle_before = app.world().resource::<PollState>().idle_count();

        probe.set(GlobalPoint::new(5000, 5000));
        sample(&mut app);

        let state = app.world().resource::<PollState>();
        assert_eq!(state.idle_count(), idle_before);
        assert_eq!(state.interval(), PollInterval::Fast);
        assert_eq!(label_text(&mut app), "Global: (30, 30)\nLocal: (30, 30)");
        assert_eq!(window_position(&mut app), WindowPosition::At(IVec2::ZERO));
    }

    #[test]
    fn no_monitors_is_a_silent_noop() {
        let probe = FixedProbe::new(GlobalPoint::new(30, 30));
        let mut app = poller_app(&probe, slow_clock_settings(60_000, 180_000), &[]);

        send_motion(&mut app);
        app.update();

        assert_eq!(label_text(&mut app), "");
        assert_eq!(app.world().resource::<PollState>().last_local(), None);
    }
}
