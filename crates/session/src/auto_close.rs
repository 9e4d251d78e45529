// Automatically exits the app after a configured number of seconds (if > 0)
// Reads `AnimConfig.window.autoClose` (RON key) / `WindowConfig::auto_close`.
// 0.0 (default) => disabled.

use bevy::prelude::*;
use sb_core::AnimConfigRes;

#[derive(Resource, Deref, DerefMut)]
pub(crate) struct AutoCloseTimer(pub(crate) Timer);

pub(crate) fn setup_auto_close(mut commands: Commands, cfg: Option<Res<AnimConfigRes>>) {
    let Some(cfg) = cfg else {
        return;
    };
    let secs = cfg.0.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

pub(crate) fn check_auto_close(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.finished() {
            info!("AutoClose: timer finished, requesting app exit");
            ev_exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timer_only_exists_when_configured() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(AnimConfigRes::default());
        app.add_systems(Startup, setup_auto_close);
        app.add_systems(Update, check_auto_close);
        app.update();
        assert!(app.world().get_resource::<AutoCloseTimer>().is_none());
    }

    #[test]
    fn fires_app_exit_after_deadline() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut cfg = sb_config::AnimConfig::default();
        cfg.window.auto_close = 0.05;
        app.insert_resource(AnimConfigRes(cfg));
        app.add_systems(Startup, setup_auto_close);
        app.add_systems(Update, check_auto_close);
        app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            Duration::from_millis(100),
        ));

        let mut exited = false;
        for _ in 0..5 {
            app.update();
            if !app.world().resource::<Events<AppExit>>().is_empty() {
                exited = true;
                break;
            }
        }
        assert!(exited, "expected AppExit after the auto-close deadline");
    }
}
