//! Feature representations: sparse vectors and structured trees
//!
//! Every example carries one or more named representations. Vector
//! representations support the full set of algebraic operations; structured
//! representations (trees) are opaque to the vector machinery and are not
//! normalizable.

/// Sparse vector representation with sorted indices
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SparseVector {
    /// Sorted indices of non-zero elements
    pub indices: Vec<usize>,
    /// Values corresponding to indices
    pub values: Vec<f64>,
}

impl SparseVector {
    /// Create a new sparse vector, ensuring indices are sorted
    pub fn new(indices: Vec<usize>, values: Vec<f64>) -> Self {
        assert_eq!(
            indices.len(),
            values.len(),
            "Indices and values must have same length"
        );

        // Sort by indices
        let mut pairs: Vec<_> = indices.into_iter().zip(values).collect();
        pairs.sort_by_key(|&(idx, _)| idx);

        let (indices, values): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        Self { indices, values }
    }

    /// Create an empty sparse vector
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Get the value at a specific index (0 if not present)
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Dot product with another sparse vector
    ///
    /// Since both vectors have sorted indices, this uses a merge-like
    /// algorithm in O(nnz(x) + nnz(y)) time.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut result = 0.0;
        let mut i = 0;
        let mut j = 0;

        while i < self.indices.len() && j < other.indices.len() {
            let x_idx = self.indices[i];
            let y_idx = other.indices[j];

            if x_idx == y_idx {
                result += self.values[i] * other.values[j];
                i += 1;
                j += 1;
            } else if x_idx < y_idx {
                i += 1;
            } else {
                j += 1;
            }
        }

        result
    }

    /// Point-wise product with another vector; entries outside the index
    /// intersection become zero and are dropped
    pub fn pointwise_product(&mut self, other: &SparseVector) {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < self.indices.len() && j < other.indices.len() {
            let x_idx = self.indices[i];
            let y_idx = other.indices[j];

            if x_idx == y_idx {
                indices.push(x_idx);
                values.push(self.values[i] * other.values[j]);
                i += 1;
                j += 1;
            } else if x_idx < y_idx {
                i += 1;
            } else {
                j += 1;
            }
        }

        self.indices = indices;
        self.values = values;
    }

    /// Add `other` to this vector
    pub fn add(&mut self, other: &SparseVector) {
        self.combine(1.0, 1.0, other);
    }

    /// Add `coeff * other` to this vector
    pub fn add_scaled(&mut self, coeff: f64, other: &SparseVector) {
        self.combine(1.0, coeff, other);
    }

    /// Replace this vector with `self_coeff * self + other_coeff * other`
    pub fn combine(&mut self, self_coeff: f64, other_coeff: f64, other: &SparseVector) {
        let mut indices = Vec::with_capacity(self.indices.len() + other.indices.len());
        let mut values = Vec::with_capacity(self.values.len() + other.values.len());
        let mut i = 0;
        let mut j = 0;

        while i < self.indices.len() || j < other.indices.len() {
            let x_idx = self.indices.get(i).copied();
            let y_idx = other.indices.get(j).copied();

            match (x_idx, y_idx) {
                (Some(x), Some(y)) if x == y => {
                    indices.push(x);
                    values.push(self_coeff * self.values[i] + other_coeff * other.values[j]);
                    i += 1;
                    j += 1;
                }
                (Some(x), Some(y)) if x < y => {
                    indices.push(x);
                    values.push(self_coeff * self.values[i]);
                    i += 1;
                }
                (Some(_), Some(y)) => {
                    indices.push(y);
                    values.push(other_coeff * other.values[j]);
                    j += 1;
                }
                (Some(x), None) => {
                    indices.push(x);
                    values.push(self_coeff * self.values[i]);
                    i += 1;
                }
                (None, Some(y)) => {
                    indices.push(y);
                    values.push(other_coeff * other.values[j]);
                    j += 1;
                }
                (None, None) => unreachable!(),
            }
        }

        self.indices = indices;
        self.values = values;
    }

    /// Compute squared L2 norm
    pub fn norm_squared(&self) -> f64 {
        self.values.iter().map(|&v| v * v).sum()
    }

    /// Compute L2 norm
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale this vector to unit L2 norm. The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
    }

    /// A zero vector of the same representation type
    pub fn zero_vector(&self) -> SparseVector {
        SparseVector::empty()
    }

    /// Iterate over the non-zero (index, value) pairs
    pub fn active_features(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of non-zero elements
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A node in a tree representation
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new<S: Into<String>>(label: S, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Leaf node constructor
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Opaque structured representation. Tree kernels walk it; the vector
/// machinery (normalization, zero vectors) cannot operate on it.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRepresentation {
    root: TreeNode,
}

impl TreeRepresentation {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

/// The kind tag of a representation, used for dispatch diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationKind {
    Vector,
    Tree,
}

impl RepresentationKind {
    pub fn name(&self) -> &'static str {
        match self {
            RepresentationKind::Vector => "vector",
            RepresentationKind::Tree => "tree",
        }
    }
}

/// One encoding of an example's features
#[derive(Clone, Debug, PartialEq)]
pub enum Representation {
    Vector(SparseVector),
    Tree(TreeRepresentation),
}

impl Representation {
    pub fn kind(&self) -> RepresentationKind {
        match self {
            Representation::Vector(_) => RepresentationKind::Vector,
            Representation::Tree(_) => RepresentationKind::Tree,
        }
    }

    /// Whether this representation supports normalization
    pub fn is_normalizable(&self) -> bool {
        matches!(self, Representation::Vector(_))
    }

    /// Normalize the representation if it supports it; a silent no-op
    /// otherwise, never an error.
    pub fn normalize(&mut self) {
        if let Representation::Vector(vector) = self {
            vector.normalize();
        }
    }

    pub fn as_vector(&self) -> Option<&SparseVector> {
        match self {
            Representation::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeRepresentation> {
        match self {
            Representation::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}

/// Typed access to the content of a [`Representation`] variant.
///
/// Direct kernels are generic over this trait: the kind check happens once at
/// the kernel boundary and a mismatch is reported instead of cast.
pub trait RepresentationContent {
    const KIND: RepresentationKind;

    fn extract(representation: &Representation) -> Option<&Self>;
}

impl RepresentationContent for SparseVector {
    const KIND: RepresentationKind = RepresentationKind::Vector;

    fn extract(representation: &Representation) -> Option<&Self> {
        representation.as_vector()
    }
}

impl RepresentationContent for TreeRepresentation {
    const KIND: RepresentationKind = RepresentationKind::Tree;

    fn extract(representation: &Representation) -> Option<&Self> {
        representation.as_tree()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sparse_vector_creation() {
        let sv = SparseVector::new(vec![2, 0, 4], vec![2.0, 1.0, 3.0]);

        // Indices must come out sorted
        assert_eq!(sv.indices, vec![0, 2, 4]);
        assert_eq!(sv.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sparse_vector_get() {
        let sv = SparseVector::new(vec![1, 3, 5], vec![1.0, 2.0, 3.0]);

        assert_eq!(sv.get(0), 0.0);
        assert_eq!(sv.get(1), 1.0);
        assert_eq!(sv.get(3), 2.0);
        assert_eq!(sv.get(6), 0.0);
    }

    #[test]
    fn test_dot_product() {
        let x = SparseVector::new(vec![0, 2, 5], vec![1.0, 3.0, 2.0]);
        let y = SparseVector::new(vec![2, 3, 5], vec![2.0, 1.0, 4.0]);

        // Overlap at indices 2 and 5: 3*2 + 2*4 = 14
        assert_eq!(x.dot(&y), 14.0);
        assert_eq!(y.dot(&x), 14.0);
    }

    #[test]
    fn test_dot_product_empty() {
        let x = SparseVector::empty();
        let y = SparseVector::new(vec![0, 1], vec![1.0, 2.0]);

        assert_eq!(x.dot(&y), 0.0);
        assert_eq!(y.dot(&x), 0.0);
    }

    #[test]
    fn test_pointwise_product() {
        let mut x = SparseVector::new(vec![0, 2, 4], vec![1.0, 2.0, 3.0]);
        let y = SparseVector::new(vec![2, 4, 6], vec![5.0, 2.0, 7.0]);

        x.pointwise_product(&y);
        assert_eq!(x.indices, vec![2, 4]);
        assert_eq!(x.values, vec![10.0, 6.0]);
    }

    #[test]
    fn test_add_and_combine() {
        let mut x = SparseVector::new(vec![0, 2], vec![1.0, 2.0]);
        let y = SparseVector::new(vec![1, 2], vec![3.0, 4.0]);

        x.add(&y);
        assert_eq!(x.indices, vec![0, 1, 2]);
        assert_eq!(x.values, vec![1.0, 3.0, 6.0]);

        let mut z = SparseVector::new(vec![0], vec![2.0]);
        z.combine(0.5, 2.0, &SparseVector::new(vec![0, 3], vec![1.0, 1.0]));
        assert_eq!(z.indices, vec![0, 3]);
        assert_eq!(z.values, vec![3.0, 2.0]);
    }

    #[test]
    fn test_add_scaled() {
        let mut x = SparseVector::new(vec![0], vec![1.0]);
        x.add_scaled(-2.0, &SparseVector::new(vec![0, 1], vec![1.0, 3.0]));

        assert_eq!(x.indices, vec![0, 1]);
        assert_eq!(x.values, vec![-1.0, -6.0]);
    }

    #[test]
    fn test_norm_and_normalize() {
        let mut sv = SparseVector::new(vec![0, 1], vec![3.0, 4.0]);
        assert_eq!(sv.norm_squared(), 25.0);
        assert_eq!(sv.norm(), 5.0);

        sv.normalize();
        assert_relative_eq!(sv.norm(), 1.0);
        assert_relative_eq!(sv.get(0), 0.6);
        assert_relative_eq!(sv.get(1), 0.8);
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        let mut sv = SparseVector::empty();
        sv.normalize();
        assert!(sv.is_empty());
    }

    #[test]
    fn test_active_features() {
        let sv = SparseVector::new(vec![1, 4], vec![2.0, 5.0]);
        let features: Vec<_> = sv.active_features().collect();
        assert_eq!(features, vec![(1, 2.0), (4, 5.0)]);
    }

    #[test]
    #[should_panic(expected = "Indices and values must have same length")]
    fn test_sparse_vector_length_mismatch() {
        SparseVector::new(vec![0, 1], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_tree_representation_is_not_normalizable() {
        let tree = TreeRepresentation::new(TreeNode::new(
            "S",
            vec![TreeNode::leaf("NP"), TreeNode::leaf("VP")],
        ));
        assert_eq!(tree.node_count(), 3);

        let mut rep = Representation::Tree(tree.clone());
        assert!(!rep.is_normalizable());

        // Normalization must be a silent no-op
        rep.normalize();
        assert_eq!(rep.as_tree(), Some(&tree));
    }

    #[test]
    fn test_representation_content_extraction() {
        let rep = Representation::Vector(SparseVector::new(vec![0], vec![1.0]));

        assert!(SparseVector::extract(&rep).is_some());
        assert!(TreeRepresentation::extract(&rep).is_none());
        assert_eq!(rep.kind().name(), "vector");
    }
}
