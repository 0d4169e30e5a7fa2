//! Capturing wildcard pattern matching
//!
//! Matches glob-like patterns where `?` consumes exactly one character and
//! `*` consumes zero or more, against an input string. A successful match
//! yields one [`Capture`] per wildcard occurrence, recording the substring it
//! consumed, so the original input can be reconstructed from the pattern's
//! literal skeleton (see [`rebuild`]).
//!
//! When a `*` admits several splits, the longest consumption that still lets
//! the remainder of the pattern match wins: `abc*fg` against `abcdefabcfg`
//! captures `defabc`, not `de`.
//!
//! Backtracking is memoized on `(pattern, input)` index pairs so adversarial
//! patterns such as `a*a*a*…b` stay polynomial instead of exponential.

use std::collections::HashSet;

/// The wildcard characters recognized in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardKind {
    /// `?`, matching exactly one character.
    Single,
    /// `*`, matching zero or more characters.
    Many,
}

impl WildcardKind {
    /// The pattern character this kind corresponds to.
    pub fn as_char(&self) -> char {
        match self {
            WildcardKind::Single => '?',
            WildcardKind::Many => '*',
        }
    }
}

/// Whether `c` is a wildcard character.
pub fn is_wildcard(c: char) -> bool {
    c == '*' || c == '?'
}

/// Whether `pattern` contains at least one wildcard character.
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.chars().any(is_wildcard)
}

/// The substring of the input consumed by one wildcard occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Which wildcard character produced this capture.
    pub kind: WildcardKind,
    /// Character index of the wildcard within the pattern.
    pub position: usize,
    /// The input substring the wildcard consumed.
    pub value: String,
}

/// Match `pattern` against `input`, returning the wildcard captures on
/// success or `None` when no assignment of the wildcards reconciles the two
/// strings.
///
/// Captures are ordered by pattern position, one per wildcard occurrence.
/// A pattern without wildcards matches only its exact literal self.
pub fn solve(pattern: &str, input: &str) -> Option<Vec<Capture>> {
    let pattern: Vec<char> = pattern.chars().collect();
    let input: Vec<char> = input.chars().collect();

    let mut solver = Solver {
        pattern: &pattern,
        input: &input,
        failed: HashSet::new(),
        captures: Vec::new(),
    };
    if solver.solve_at(0, 0) {
        Some(solver.captures)
    } else {
        None
    }
}

/// Whether `pattern` matches `input`, discarding captures.
pub fn is_match(pattern: &str, input: &str) -> bool {
    solve(pattern, input).is_some()
}

/// Reconstruct the matched input from a pattern and its captures.
///
/// For every successful [`solve`], `rebuild(pattern, &captures)` returns the
/// original input exactly.
pub fn rebuild(pattern: &str, captures: &[Capture]) -> String {
    let mut output = String::new();
    let mut captures = captures.iter();
    for (position, c) in pattern.chars().enumerate() {
        if is_wildcard(c) {
            if let Some(capture) = captures.next() {
                debug_assert_eq!(capture.position, position);
                output.push_str(&capture.value);
            }
        } else {
            output.push(c);
        }
    }
    output
}

struct Solver<'a> {
    pattern: &'a [char],
    input: &'a [char],
    // (pattern index, input index) states already proven unsolvable
    failed: HashSet<(usize, usize)>,
    captures: Vec<Capture>,
}

impl Solver<'_> {
    fn solve_at(&mut self, p: usize, i: usize) -> bool {
        if self.failed.contains(&(p, i)) {
            return false;
        }

        if p == self.pattern.len() {
            if i == self.input.len() {
                return true;
            }
            self.failed.insert((p, i));
            return false;
        }

        let solved = match self.pattern[p] {
            '?' => self.solve_single(p, i),
            '*' => self.solve_many(p, i),
            literal => {
                i < self.input.len() && self.input[i] == literal && self.solve_at(p + 1, i + 1)
            }
        };

        if !solved {
            self.failed.insert((p, i));
        }
        solved
    }

    fn solve_single(&mut self, p: usize, i: usize) -> bool {
        if i >= self.input.len() {
            return false;
        }
        self.captures.push(Capture {
            kind: WildcardKind::Single,
            position: p,
            value: self.input[i].to_string(),
        });
        if self.solve_at(p + 1, i + 1) {
            return true;
        }
        self.captures.pop();
        false
    }

    fn solve_many(&mut self, p: usize, i: usize) -> bool {
        // Longest consumption first, so the winning split maximizes this
        // wildcard's capture.
        for taken in (0..=self.input.len() - i).rev() {
            self.captures.push(Capture {
                kind: WildcardKind::Many,
                position: p,
                value: self.input[i..i + taken].iter().collect(),
            });
            if self.solve_at(p + 1, i + taken) {
                return true;
            }
            self.captures.pop();
        }
        false
    }
}
