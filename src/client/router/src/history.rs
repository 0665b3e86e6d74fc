/* src/client/router/src/history.rs */

/// Browser-style history: visited URLs and a cursor into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
  entries: Vec<String>,
  cursor: Option<usize>,
}

impl History {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a new visit. Entries ahead of the cursor are discarded.
  pub fn push(&mut self, url: impl Into<String>) {
    let next = self.cursor.map_or(0, |c| c + 1);
    self.entries.truncate(next);
    self.entries.push(url.into());
    self.cursor = Some(next);
  }

  /// Overwrite the current entry without growing the stack.
  pub fn replace(&mut self, url: impl Into<String>) {
    match self.cursor {
      Some(c) => self.entries[c] = url.into(),
      None => self.push(url),
    }
  }

  pub fn back(&mut self) -> Option<String> {
    let c = self.cursor.filter(|&c| c > 0)?;
    self.cursor = Some(c - 1);
    Some(self.entries[c - 1].clone())
  }

  pub fn forward(&mut self) -> Option<String> {
    let c = self.cursor?;
    let url = self.entries.get(c + 1)?.clone();
    self.cursor = Some(c + 1);
    Some(url)
  }

  pub fn current(&self) -> Option<&str> {
    self.cursor.map(|c| self.entries[c].as_str())
  }

  pub fn can_go_back(&self) -> bool {
    self.cursor.is_some_and(|c| c > 0)
  }

  pub fn can_go_forward(&self) -> bool {
    self.cursor.is_some_and(|c| c + 1 < self.entries.len())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
