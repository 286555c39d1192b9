use serde::Serialize;

use crate::analyzers::utility::{mean, median, sum};
use crate::records::Records;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Max,
    Min,
}

/// The highest or lowest value together with every name that holds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub value: f64,
    pub names: Vec<String>,
}

/// Finds the extremum of `entries` in `direction`.
///
/// Ties are kept: `names` lists every entry equal to the extremum, in the
/// order they were yielded. Returns `None` for empty input.
pub fn extremum<'a, I>(entries: I, direction: Direction) -> Option<Extremum>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<Extremum> = None;

    for (name, value) in entries {
        match &mut best {
            None => {
                best = Some(Extremum {
                    value,
                    names: vec![name.to_string()],
                });
            }
            Some(b) => {
                let better = match direction {
                    Direction::Max => value > b.value,
                    Direction::Min => value < b.value,
                };
                if better {
                    b.value = value;
                    b.names.clear();
                    b.names.push(name.to_string());
                } else if value == b.value {
                    b.names.push(name.to_string());
                }
            }
        }
    }

    best
}

/// Aggregate figures over a set of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub max: Extremum,
    pub min: Extremum,
}

impl Summary {
    /// Returns `None` when there are no records to summarize.
    pub fn from_records(records: &Records) -> Option<Self> {
        let values = records.values();
        let max = extremum(records.iter(), Direction::Max)?;
        let min = extremum(records.iter(), Direction::Min)?;

        Some(Summary {
            count: values.len(),
            sum: sum(&values),
            mean: mean(&values),
            median: median(&values),
            max,
            min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, f64)]) -> Records {
        let mut r = Records::new();
        for (n, v) in pairs {
            r.insert(*n, *v);
        }
        r
    }

    #[test]
    fn test_extremum_empty() {
        assert_eq!(extremum(Vec::<(&str, f64)>::new(), Direction::Max), None);
    }

    #[test]
    fn test_extremum_collects_ties_in_order() {
        let r = records(&[("Zed", 50.0), ("Amy", 90.0), ("Bob", 10.0), ("Cat", 90.0), ("Dan", 10.0)]);

        let max = extremum(r.iter(), Direction::Max).unwrap();
        assert_eq!(max.value, 90.0);
        assert_eq!(max.names, vec!["Amy", "Cat"]);

        let min = extremum(r.iter(), Direction::Min).unwrap();
        assert_eq!(min.value, 10.0);
        assert_eq!(min.names, vec!["Bob", "Dan"]);
    }

    #[test]
    fn test_extremum_resets_ties_on_new_best() {
        let r = records(&[("a", 5.0), ("b", 5.0), ("c", 9.0)]);
        let max = extremum(r.iter(), Direction::Max).unwrap();
        assert_eq!(max.names, vec!["c"]);
    }

    #[test]
    fn test_summary_empty_is_none() {
        assert!(Summary::from_records(&Records::new()).is_none());
    }

    #[test]
    fn test_summary_gradebook_scenario() {
        let r = records(&[("Alice", 92.0), ("Bob", 76.0), ("Carol", 76.0), ("Dave", 38.0)]);
        let s = Summary::from_records(&r).unwrap();

        assert_eq!(s.count, 4);
        assert_eq!(s.sum, 282.0);
        assert_eq!(s.mean, 70.5);
        assert_eq!(s.median, 76.0);
        assert_eq!(s.max.value, 92.0);
        assert_eq!(s.max.names, vec!["Alice"]);
        assert_eq!(s.min.value, 38.0);
        assert_eq!(s.min.names, vec!["Dave"]);
    }
}
