/// A Path through the Road Network
///
/// Stores the visited Locations in order, including start and goal, and the total length of the
/// Edges between them in `cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: f64,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Locations and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use road_graph::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.2);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 4.2);
    /// ```
    pub fn new(path: Vec<P>, cost: f64) -> Path<P> {
        Path { path, cost }
    }

    /// The total length of the Roads along this Path
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The number of Locations on the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Locations
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The number of Roads taken
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// Unwraps the Locations of the Path
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path.as_slice() == *rhs
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 4.2);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
        assert_eq!(path.edge_count(), 2);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![4, 2, 0], 42.5);

        assert_eq!(&format!("{}", path), "Path[Cost = 42.5]: 4 -> 2 -> 0");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
        assert_eq!(path.edge_count(), 0);
    }
}
