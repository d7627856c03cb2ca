//! Gesture translator: turns a stream of fingertip samples into debounced,
//! rate-limited discrete commands.
//!
//! Two timing rules gate every emission: the point must have dwelled in a
//! command zone for the activation delay (so transits through a zone do not
//! fire), and each command has its own cooldown (so a held position does not
//! fire at camera frame rate). Timestamps are supplied by the caller and
//! must be non-decreasing; they should be captured when the point was
//! sampled, not when it was consumed.

use std::time::Duration;

use crate::gesture::zones::{classify, GestureCommand, Point, Zone};

/// Default dwell before a zone's command becomes eligible.
pub const ACTIVATION_DELAY: Duration = Duration::from_millis(100);

/// Default per-command cooldowns. Rotation is deliberately slower to avoid
/// spin-lock from a held position.
pub const MOVE_COOLDOWN: Duration = Duration::from_millis(150);
pub const ROTATE_COOLDOWN: Duration = Duration::from_millis(300);
pub const DROP_COOLDOWN: Duration = Duration::from_millis(100);

/// Default frame resolution the caller scales normalized points to.
pub const FRAME_WIDTH: f32 = 640.0;
pub const FRAME_HEIGHT: f32 = 480.0;

/// Frame geometry and timing knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorConfig {
    pub frame_width: f32,
    pub frame_height: f32,
    pub activation_delay: Duration,
    pub move_cooldown: Duration,
    pub rotate_cooldown: Duration,
    pub drop_cooldown: Duration,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            activation_delay: ACTIVATION_DELAY,
            move_cooldown: MOVE_COOLDOWN,
            rotate_cooldown: ROTATE_COOLDOWN,
            drop_cooldown: DROP_COOLDOWN,
        }
    }
}

impl TranslatorConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        use std::env;

        let mut config = Self::default();
        if let Some(w) = env::var("GESTRIS_FRAME_WIDTH").ok().and_then(|s| s.parse().ok()) {
            config.frame_width = w;
        }
        if let Some(h) = env::var("GESTRIS_FRAME_HEIGHT").ok().and_then(|s| s.parse().ok()) {
            config.frame_height = h;
        }
        if let Some(ms) = env::var("GESTRIS_DWELL_MS").ok().and_then(|s| s.parse().ok()) {
            config.activation_delay = Duration::from_millis(ms);
        }
        config
    }

    /// Cooldown for a specific command.
    pub fn cooldown(&self, command: GestureCommand) -> Duration {
        match command {
            GestureCommand::MoveLeft | GestureCommand::MoveRight => self.move_cooldown,
            GestureCommand::Rotate => self.rotate_cooldown,
            GestureCommand::SoftDrop => self.drop_cooldown,
        }
    }
}

/// Translator state: current zone, its entry time, and per-command emission
/// times. Mutated only by `translate`.
#[derive(Debug, Clone)]
pub struct GestureTranslator {
    config: TranslatorConfig,
    current_zone: Option<Zone>,
    zone_entered_at: Duration,
    last_emit: [Option<Duration>; 4],
}

impl GestureTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            current_zone: None,
            zone_entered_at: Duration::ZERO,
            last_emit: [None; 4],
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Zone the point currently sits in, if any sample has arrived yet.
    pub fn current_zone(&self) -> Option<Zone> {
        self.current_zone
    }

    /// Process one poll. Returns at most one command.
    ///
    /// A missing sample (no hand detected this poll) is not a zone change:
    /// all state stays put, so a single dropped camera frame cannot reset
    /// the dwell timer.
    pub fn translate(&mut self, input: Option<Point>, now: Duration) -> Option<GestureCommand> {
        let point = input?;
        let zone = classify(point, self.config.frame_width, self.config.frame_height);

        if self.current_zone != Some(zone) {
            self.current_zone = Some(zone);
            self.zone_entered_at = now;
        }

        let command = zone.command()?;

        if now.saturating_sub(self.zone_entered_at) < self.config.activation_delay {
            return None;
        }

        let slot = command.index();
        if let Some(last) = self.last_emit[slot] {
            if now.saturating_sub(last) < self.config.cooldown(command) {
                return None;
            }
        }

        self.last_emit[slot] = Some(now);
        Some(command)
    }

    /// Forget the current zone and all emission history.
    pub fn reset(&mut self) {
        self.current_zone = None;
        self.zone_entered_at = Duration::ZERO;
        self.last_emit = [None; 4];
    }
}

impl Default for GestureTranslator {
    fn default() -> Self {
        Self::new(TranslatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Center of the LEFT zone in the default 640x480 frame.
    fn left_point() -> Point {
        Point::new(100.0, 240.0)
    }

    fn rotate_point() -> Point {
        Point::new(320.0, 80.0)
    }

    #[test]
    fn test_dwell_gates_first_emission() {
        let mut tr = GestureTranslator::default();

        assert_eq!(tr.translate(Some(left_point()), ms(0)), None);
        assert_eq!(tr.translate(Some(left_point()), ms(50)), None);
        assert_eq!(
            tr.translate(Some(left_point()), ms(120)),
            Some(GestureCommand::MoveLeft)
        );
    }

    #[test]
    fn test_cooldown_blocks_rapid_repeat() {
        let mut tr = GestureTranslator::default();

        tr.translate(Some(left_point()), ms(0));
        assert_eq!(
            tr.translate(Some(left_point()), ms(120)),
            Some(GestureCommand::MoveLeft)
        );
        // Within the 150ms move cooldown.
        assert_eq!(tr.translate(Some(left_point()), ms(200)), None);
        // Past it.
        assert_eq!(
            tr.translate(Some(left_point()), ms(280)),
            Some(GestureCommand::MoveLeft)
        );
    }

    #[test]
    fn test_rotate_cooldown_is_longer() {
        let mut tr = GestureTranslator::default();

        tr.translate(Some(rotate_point()), ms(0));
        assert_eq!(
            tr.translate(Some(rotate_point()), ms(150)),
            Some(GestureCommand::Rotate)
        );
        assert_eq!(tr.translate(Some(rotate_point()), ms(350)), None);
        assert_eq!(
            tr.translate(Some(rotate_point()), ms(460)),
            Some(GestureCommand::Rotate)
        );
    }

    #[test]
    fn test_cooldowns_are_per_command() {
        let mut tr = GestureTranslator::default();

        tr.translate(Some(left_point()), ms(0));
        assert_eq!(
            tr.translate(Some(left_point()), ms(120)),
            Some(GestureCommand::MoveLeft)
        );

        // Move to ROTATE: its cooldown clock is independent, only the dwell
        // in the new zone gates it.
        tr.translate(Some(rotate_point()), ms(130));
        assert_eq!(
            tr.translate(Some(rotate_point()), ms(240)),
            Some(GestureCommand::Rotate)
        );
    }

    #[test]
    fn test_zone_change_resets_dwell() {
        let mut tr = GestureTranslator::default();

        tr.translate(Some(left_point()), ms(0));
        // Pass through the neutral center, then come back.
        tr.translate(Some(Point::new(320.0, 240.0)), ms(60));
        tr.translate(Some(left_point()), ms(90));
        // Only 40ms back in the zone: dwell not met.
        assert_eq!(tr.translate(Some(left_point()), ms(130)), None);
        assert_eq!(
            tr.translate(Some(left_point()), ms(200)),
            Some(GestureCommand::MoveLeft)
        );
    }

    #[test]
    fn test_dropped_frame_does_not_reset_dwell() {
        let mut tr = GestureTranslator::default();

        tr.translate(Some(left_point()), ms(0));
        // Hand lost for one poll: state untouched, no command.
        assert_eq!(tr.translate(None, ms(50)), None);
        // Dwell still counts from the original entry at t=0.
        assert_eq!(
            tr.translate(Some(left_point()), ms(110)),
            Some(GestureCommand::MoveLeft)
        );
    }

    #[test]
    fn test_neutral_zones_never_emit() {
        let mut tr = GestureTranslator::default();

        // Center, then a corner, held well past every threshold.
        for (t, p) in [
            (0, Point::new(320.0, 240.0)),
            (500, Point::new(320.0, 240.0)),
            (1000, Point::new(10.0, 10.0)),
            (2000, Point::new(10.0, 10.0)),
        ] {
            assert_eq!(tr.translate(Some(p), ms(t)), None);
        }
    }

    #[test]
    fn test_at_most_one_command_per_poll() {
        let mut tr = GestureTranslator::default();
        tr.translate(Some(left_point()), ms(0));
        let mut emitted = 0;
        for t in [120u64, 150, 300, 470] {
            if tr.translate(Some(left_point()), ms(t)).is_some() {
                emitted += 1;
            }
        }
        // 120 fires, 150 is inside cooldown, 300 and 470 fire.
        assert_eq!(emitted, 3);
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut tr = GestureTranslator::default();
        tr.translate(Some(left_point()), ms(0));
        assert_eq!(
            tr.translate(Some(left_point()), ms(120)),
            Some(GestureCommand::MoveLeft)
        );

        tr.reset();
        assert_eq!(tr.current_zone(), None);
        // Fresh dwell required again.
        assert_eq!(tr.translate(Some(left_point()), ms(130)), None);
        assert_eq!(
            tr.translate(Some(left_point()), ms(240)),
            Some(GestureCommand::MoveLeft)
        );
    }
}
