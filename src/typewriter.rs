//! Typewriter reveal: one character per fixed interval.

use std::time::{Duration, Instant};

/// Every this many characters the line bell hook fires.
pub const BELL_EVERY: usize = 60;

/// Side effects fired while text is revealed.
pub trait TypewriterHooks {
    /// A non-space character was revealed.
    fn on_char(&mut self, _ch: char) {}
    /// Roughly the end of a visual line.
    fn on_line_bell(&mut self) {}
    /// Whole text revealed. Fires exactly once.
    fn on_complete(&mut self) {}
}

impl TypewriterHooks for () {}

/// What a single step revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub ch: char,
    /// Index of the revealed character
    pub index: usize,
    pub plays_sound: bool,
    pub rings_bell: bool,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    /// Byte length of the revealed prefix
    revealed_bytes: usize,
    text: String,
    interval: Duration,
    next_due: Option<Instant>,
    completed: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            revealed_bytes: 0,
            text,
            interval,
            next_due: None,
            completed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Revealed prefix of the text.
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Reveal the next character, if any.
    pub fn step(&mut self) -> Option<Step> {
        let index = self.revealed;
        let ch = *self.chars.get(index)?;
        self.revealed += 1;
        self.revealed_bytes += ch.len_utf8();
        Some(Step {
            ch,
            index,
            plays_sound: ch != ' ',
            rings_bell: index > 0 && index % BELL_EVERY == 0,
        })
    }

    /// Perform every step whose deadline has passed by `now`.
    /// The first call starts the clock; each step is due one interval after the previous one.
    pub fn tick(&mut self, now: Instant, hooks: &mut impl TypewriterHooks) {
        if self.completed {
            return;
        }

        let mut due = *self.next_due.get_or_insert(now + self.interval);
        while !self.is_done() && due <= now {
            if let Some(step) = self.step() {
                if step.plays_sound {
                    hooks.on_char(step.ch);
                }
                if step.rings_bell {
                    hooks.on_line_bell();
                }
            }
            due += self.interval;
        }
        self.next_due = Some(due);

        if self.is_done() {
            self.completed = true;
            hooks.on_complete();
        }
    }

    /// Reveal everything at once, still firing completion once.
    pub fn finish(&mut self, hooks: &mut impl TypewriterHooks) {
        self.revealed = self.chars.len();
        self.revealed_bytes = self.text.len();
        if !self.completed {
            self.completed = true;
            hooks.on_complete();
        }
    }

    /// Time until the next character is due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.completed {
            return None;
        }
        Some(
            self.next_due
                .map(|due| due.saturating_duration_since(now))
                .unwrap_or(Duration::ZERO),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        chars: Vec<char>,
        bells: usize,
        completions: usize,
    }

    impl TypewriterHooks for Recorder {
        fn on_char(&mut self, ch: char) {
            self.chars.push(ch);
        }
        fn on_line_bell(&mut self) {
            self.bells += 1;
        }
        fn on_complete(&mut self) {
            self.completions += 1;
        }
    }

    const MS: Duration = Duration::from_millis(10);

    #[test]
    fn reveals_one_char_per_interval() {
        let start = Instant::now();
        let mut tw = Typewriter::new("abc", MS);
        let mut rec = Recorder::default();

        tw.tick(start, &mut rec);
        assert_eq!(tw.visible(), "");
        tw.tick(start + MS, &mut rec);
        assert_eq!(tw.visible(), "a");
        tw.tick(start + MS * 2, &mut rec);
        assert_eq!(tw.visible(), "ab");
        assert_eq!(rec.completions, 0);
    }

    #[test]
    fn catches_up_after_a_long_pause() {
        let start = Instant::now();
        let mut tw = Typewriter::new("hello", MS);
        let mut rec = Recorder::default();
        tw.tick(start, &mut rec);
        tw.tick(start + MS * 50, &mut rec);
        assert_eq!(tw.visible(), "hello");
        assert_eq!(rec.completions, 1);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let start = Instant::now();
        let mut tw = Typewriter::new("hi", MS);
        let mut rec = Recorder::default();
        tw.tick(start, &mut rec);
        for i in 1..10 {
            tw.tick(start + MS * i, &mut rec);
        }
        tw.finish(&mut rec);
        assert_eq!(rec.completions, 1);
        assert!(tw.is_completed());
        assert_eq!(tw.time_until_next(start), None);
    }

    #[test]
    fn empty_text_completes_immediately() {
        let mut tw = Typewriter::new("", MS);
        let mut rec = Recorder::default();
        tw.tick(Instant::now(), &mut rec);
        assert_eq!(rec.completions, 1);
    }

    #[test]
    fn spaces_do_not_play_sound() {
        let start = Instant::now();
        let mut tw = Typewriter::new("a b", MS);
        let mut rec = Recorder::default();
        tw.tick(start, &mut rec);
        tw.tick(start + MS * 3, &mut rec);
        assert_eq!(rec.chars, vec!['a', 'b']);
    }

    #[test]
    fn bell_rings_every_sixty_characters() {
        let text = "x".repeat(130);
        let mut tw = Typewriter::new(text, MS);
        let mut bells = Vec::new();
        while let Some(step) = tw.step() {
            if step.rings_bell {
                bells.push(step.index);
            }
        }
        assert_eq!(bells, vec![60, 120]);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut tw = Typewriter::new("\u{2605}ok", MS);
        tw.step();
        assert_eq!(tw.visible(), "\u{2605}");
        tw.step();
        assert_eq!(tw.visible(), "\u{2605}o");
    }
}
