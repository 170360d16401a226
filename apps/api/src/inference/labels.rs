//! Index-to-label decoding for model output distributions.
//!
//! The artifact is a JSON array of class names, index-aligned with the
//! position of each class in a model's output distribution (the class list
//! of the fitted encoder both models were trained against).

#[derive(Debug, Clone)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let classes: Vec<String> = serde_json::from_str(raw)?;
        Ok(Self::new(classes))
    }

    /// Label for a distribution index; `None` when the index falls outside
    /// the trained class set.
    pub fn decode(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
