use compact_str::CompactString;
use smallvec::SmallVec;
use std::fmt;

/// Second label of a pointer owner name that marks a DNS-SD subtype
/// (`<subtype>._sub.<service>.<proto>.<domain>`).
pub const SUBTYPE_LABEL: &str = "_sub";

/// An ordered DNS name, one entry per label, without the root terminator.
///
/// Case is preserved exactly as read from the wire. Grouping and filtering
/// go through [`Labels::eq_ignore_case`] since DNS names compare
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Labels(SmallVec<[CompactString; 4]>);

impl Labels {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(labels.into_iter().map(CompactString::new).collect())
    }

    /// Splits a dotted name (`"foo.bar.local"`) into labels. Empty components,
    /// including a trailing root dot, are dropped.
    pub fn from_dotted(name: &str) -> Self {
        Self(
            name.split('.')
                .filter(|label| !label.is_empty())
                .map(CompactString::new)
                .collect(),
        )
    }

    pub fn push(&mut self, label: &str) {
        self.0.push(CompactString::new(label));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|label| label.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|label| label.as_str())
    }

    /// Returns the name with its first `count` labels removed.
    pub fn skip(&self, count: usize) -> Labels {
        Self(self.0.iter().skip(count).cloned().collect())
    }

    pub fn strip_first(&self) -> Labels {
        self.skip(1)
    }

    pub fn eq_ignore_case(&self, other: &Labels) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// True when `self` matches the trailing labels of `other`, compared
    /// case-insensitively. An empty name is a suffix of every name.
    pub fn is_suffix_of(&self, other: &Labels) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let offset = other.len() - self.len();
        self.iter()
            .zip(other.iter().skip(offset))
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, label) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl From<&str> for Labels {
    fn from(name: &str) -> Self {
        Labels::from_dotted(name)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Labels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Labels::new(iter)
    }
}
