/// How the two operands of a CSG node combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsgOperation {
    /// Everything inside either operand.
    Union,
    /// Only what is inside both operands.
    Intersection,
    /// The left operand with the right carved away.
    Difference,
}

impl CsgOperation {
    /// Whether a hit survives the operation.
    ///
    /// `left_hit` is set when the hit lies on the left operand; `in_left` and
    /// `in_right` say whether the ray is currently inside each operand.
    #[must_use]
    pub fn intersection_allowed(self, left_hit: bool, in_left: bool, in_right: bool) -> bool {
        match self {
            Self::Union => (left_hit && !in_right) || (!left_hit && !in_left),
            Self::Intersection => (left_hit && in_right) || (!left_hit && in_left),
            Self::Difference => (left_hit && !in_right) || (!left_hit && in_left),
        }
    }
}
