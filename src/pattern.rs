use crate::decode::decode;
use crate::error::{DecodeError, InsertError};
use crate::params::Params;

/// A validation rule attached to a parameter segment.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Constraint {
    /// One or more ASCII digits (`:ix#num`).
    Numeric,
}

impl Constraint {
    fn from_suffix(suffix: &str) -> Option<Constraint> {
        match suffix {
            "num" => Some(Constraint::Numeric),
            _ => None,
        }
    }

    /// Returns `true` if the raw path segment satisfies the constraint.
    pub fn check(self, segment: &str) -> bool {
        match self {
            Constraint::Numeric => {
                !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
            }
        }
    }
}

/// A single `/`-delimited component of a compiled pattern.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Matches any single segment (`:name`).
    Param(String),
    /// Matches a single segment satisfying the constraint (`:name#num`).
    Constrained(String, Constraint),
    /// Absorbs one or more consecutive segments (`:name*`).
    CatchAll(String),
}

impl Segment {
    fn parse(raw: &str) -> Result<Segment, InsertError> {
        let Some(body) = raw.strip_prefix(':') else {
            return Ok(Segment::Literal(raw.to_owned()));
        };

        let end = body.find(|c: char| c == '#' || c == '*').unwrap_or(body.len());
        let (name, suffix) = body.split_at(end);

        if name.is_empty() {
            return Err(InsertError::UnnamedParam);
        }

        let name = name.to_owned();
        match suffix {
            "" => Ok(Segment::Param(name)),
            "*" => Ok(Segment::CatchAll(name)),
            _ => suffix
                .strip_prefix('#')
                .and_then(Constraint::from_suffix)
                .map(|constraint| Segment::Constrained(name, constraint))
                .ok_or_else(|| InsertError::InvalidParam {
                    segment: raw.to_owned(),
                }),
        }
    }

    /// The parameter name, if this segment is a parameter.
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(name) | Segment::Constrained(name, _) | Segment::CatchAll(name) => {
                Some(name.as_str())
            }
        }
    }
}

/// A route pattern compiled once into its segments.
///
/// ```rust
/// use hashroute::Pattern;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pattern = Pattern::new("#/services/:name/:ix#num/:action")?;
///
/// let params = pattern.matches("#/services/users/2/edit")?.unwrap();
/// assert_eq!(params.get("ix"), Some("2"));
///
/// assert!(pattern.matches("#/services/users/two/edit")?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
    // Index of the catch-all segment, if any.
    catch_all: Option<usize>,
}

impl Pattern {
    /// Compiles a pattern string.
    pub fn new(raw: impl Into<String>) -> Result<Pattern, InsertError> {
        let raw = raw.into();
        let mut segments = Vec::new();
        let mut catch_all = None;

        for (i, part) in raw.split('/').enumerate() {
            let segment = Segment::parse(part)?;

            if let Some(name) = segment.name() {
                if segments.iter().any(|s: &Segment| s.name() == Some(name)) {
                    return Err(InsertError::DuplicateParam {
                        name: name.to_owned(),
                    });
                }
            }

            if let Segment::CatchAll(_) = segment {
                if catch_all.replace(i).is_some() {
                    return Err(InsertError::TooManyCatchAll);
                }
            }

            segments.push(segment);
        }

        Ok(Pattern {
            raw,
            segments,
            catch_all,
        })
    }

    /// Returns the pattern string this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the compiled segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if the pattern has no parameter segments.
    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|s| s.name().is_none())
    }

    /// Returns the parameter names in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::name)
    }

    /// Matches a path (with any query already stripped) against this pattern
    /// and decodes the captured parameters.
    ///
    /// Returns `Ok(None)` if the path does not match. Decoding only happens
    /// once the path has matched structurally.
    pub fn matches<'k, 'p>(&'k self, path: &'p str) -> Result<Option<Params<'k, 'p>>, DecodeError> {
        match self.capture(path) {
            Some(captures) => captures.decode().map(Some),
            None => Ok(None),
        }
    }

    /// Structural match: literal equality, arity and constraints, with the
    /// raw captured values in pattern order.
    pub(crate) fn capture<'k, 'p>(&'k self, path: &'p str) -> Option<Captures<'k, 'p>> {
        let parts = path.split('/').collect::<Vec<_>>();
        let n = self.segments.len();
        let m = parts.len();
        let mut captures = Captures(Vec::new());

        match self.catch_all {
            None => {
                if m != n {
                    return None;
                }

                fixed(&self.segments, &parts, &mut captures)?;
            }
            Some(w) => {
                // the catch-all absorbs at least one segment
                if m < n {
                    return None;
                }

                let tail = n - 1 - w;
                let end = m - tail;

                fixed(&self.segments[..w], &parts[..w], &mut captures)?;

                if let Segment::CatchAll(name) = &self.segments[w] {
                    captures.0.push((name.as_str(), span(path, &parts, w, end)));
                }

                fixed(&self.segments[w + 1..], &parts[end..], &mut captures)?;
            }
        }

        Some(captures)
    }
}

impl std::str::FromStr for Pattern {
    type Err = InsertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

/// Raw, undecoded parameter values captured by a structural match.
#[derive(Debug)]
pub(crate) struct Captures<'k, 'p>(Vec<(&'k str, &'p str)>);

impl<'k, 'p> Captures<'k, 'p> {
    pub(crate) fn decode(self) -> Result<Params<'k, 'p>, DecodeError> {
        let mut params = Params::new();
        for (name, raw) in self.0 {
            params.push(name, decode(raw)?);
        }

        Ok(params)
    }
}

// Matches segments pairwise. Both slices have the same length. A catch-all
// never matches here.
fn fixed<'k, 'p>(
    segments: &'k [Segment],
    parts: &[&'p str],
    captures: &mut Captures<'k, 'p>,
) -> Option<()> {
    for (segment, &part) in segments.iter().zip(parts) {
        match segment {
            Segment::Literal(literal) => {
                if literal != part {
                    return None;
                }
            }
            Segment::Param(name) => captures.0.push((name.as_str(), part)),
            Segment::Constrained(name, constraint) => {
                if !constraint.check(part) {
                    return None;
                }

                captures.0.push((name.as_str(), part));
            }
            Segment::CatchAll(_) => return None,
        }
    }

    Some(())
}

// The slice of `path` covering `parts[start..end]`, separators included.
fn span<'p>(path: &'p str, parts: &[&'p str], start: usize, end: usize) -> &'p str {
    let offset = parts[..start].iter().map(|p| p.len() + 1).sum::<usize>();
    let len = parts[start..end].iter().map(|p| p.len()).sum::<usize>() + (end - start - 1);
    &path[offset..offset + len]
}
