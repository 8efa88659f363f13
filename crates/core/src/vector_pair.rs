use crate::SimilarityError;

pub(crate) const FIRST: &str = "vector1";
pub(crate) const SECOND: &str = "vector2";

/// Two non-empty vectors of equal length with finite components.
///
/// The fields are private so the invariant can only be established through
/// [`VectorPair::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPair {
  a: Vec<f64>,
  b: Vec<f64>,
}

impl VectorPair {
  pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self, SimilarityError> {
    check_components(FIRST, &a)?;
    check_components(SECOND, &b)?;

    if a.len() != b.len() {
      return Err(SimilarityError::InvalidInput(format!(
        "{FIRST} and {SECOND} must have the same length (got {} and {})",
        a.len(),
        b.len()
      )));
    }

    Ok(Self { a, b })
  }

  #[must_use]
  pub fn a(&self) -> &[f64] {
    &self.a
  }

  #[must_use]
  pub fn b(&self) -> &[f64] {
    &self.b
  }

  /// Dimension shared by both vectors.
  pub(crate) fn len(&self) -> usize {
    self.a.len()
  }
}

fn check_components(name: &str, v: &[f64]) -> Result<(), SimilarityError> {
  if v.is_empty() {
    return Err(SimilarityError::InvalidInput(format!(
      "{name} must not be empty"
    )));
  }
  if let Some(i) = v.iter().position(|x| !x.is_finite()) {
    return Err(SimilarityError::InvalidInput(format!(
      "{name}[{i}] is not a finite number"
    )));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn invalid(result: Result<VectorPair, SimilarityError>) -> String {
    match result {
      Err(SimilarityError::InvalidInput(msg)) => msg,
      other => panic!("expected InvalidInput, got {other:?}"),
    }
  }

  #[test]
  fn accepts_equal_length_vectors() {
    let pair = VectorPair::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
    assert_eq!(pair.len(), 2);
    assert_eq!(pair.a(), &[1.0, 2.0]);
    assert_eq!(pair.b(), &[3.0, 4.0]);
  }

  #[test]
  fn rejects_length_mismatch() {
    let msg = invalid(VectorPair::new(vec![1.0, 2.0], vec![1.0, 2.0, 3.0]));
    assert!(msg.contains("same length"), "{msg}");
    assert!(msg.contains("2 and 3"), "{msg}");
  }

  #[test]
  fn rejects_empty_vectors() {
    assert!(invalid(VectorPair::new(vec![], vec![1.0])).starts_with("vector1"));
    assert!(invalid(VectorPair::new(vec![1.0], vec![])).starts_with("vector2"));
    assert!(invalid(VectorPair::new(vec![], vec![])).contains("must not be empty"));
  }

  #[test]
  fn rejects_non_finite_components() {
    let msg = invalid(VectorPair::new(vec![1.0, f64::NAN], vec![1.0, 1.0]));
    assert_eq!(msg, "vector1[1] is not a finite number");
    let msg = invalid(VectorPair::new(vec![1.0], vec![f64::INFINITY]));
    assert_eq!(msg, "vector2[0] is not a finite number");
  }
}
