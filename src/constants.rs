// Central constants for cooldowns, game timing, and static reply tables.

/// Default per-user cooldown applied to every slash command.
pub const DEFAULT_COOLDOWN_SECS: u64 = 3;

/// Inactivity window before an unfinished guess-number game is closed.
pub const GUESS_TIMEOUT_SECS: u64 = 300;

/// Default upper bound for the guess-number game.
pub const GUESS_DEFAULT_MAX: i64 = 100;

/// Differences larger than this get the coarse directional hint (🔼/🔽);
/// anything closer gets the fine one (↗️/↘️). User-observable, do not tune.
pub const GUESS_HINT_THRESHOLD: i64 = 10;

/// Answer table for the magic 8-ball.
pub const EIGHT_BALL_ANSWERS: [&str; 8] = [
    "Yes 👍",
    "No 👎",
    "Maybe 🤔",
    "Absolutely ✅",
    "Definitely not ❌",
    "I don't think so 😅",
    "Ask again later ⏳",
    "Very likely 😎",
];

// Embed accent colors.
pub const COLOR_BLURPLE: u32 = 0x5865F2;
pub const COLOR_GREEN: u32 = 0x00FF00;
pub const COLOR_RED: u32 = 0xFF0000;
pub const COLOR_ORANGE: u32 = 0xFFA500;
