//! Ordered variable dictionary
//!
//! The dictionary keeps variables in file order; a variable's position is
//! its column index in the case matrix. Names may repeat, in which case a
//! name lookup resolves to the first column carrying it.

use alloc::vec::Vec;
use core::ops::Index;

use hashbrown::HashMap;

use crate::VariableDefinition;

/// Variables of one file, in column order, with a name index
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    variables: Vec<VariableDefinition>,
    by_name: HashMap<alloc::string::String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary with room for `capacity` variables
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            variables: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Append a variable as the next column
    pub fn push(&mut self, variable: VariableDefinition) {
        let column = self.variables.len();
        self.by_name.entry(variable.name.clone()).or_insert(column);
        self.variables.push(variable);
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Column index of the first variable with this name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// First variable with this name
    pub fn get_by_name(&self, name: &str) -> Option<&VariableDefinition> {
        self.position(name).map(|column| &self.variables[column])
    }

    pub fn get(&self, column: usize) -> Option<&VariableDefinition> {
        self.variables.get(column)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, VariableDefinition> {
        self.variables.iter()
    }

    pub fn as_slice(&self) -> &[VariableDefinition] {
        &self.variables
    }

    pub fn into_vec(self) -> Vec<VariableDefinition> {
        self.variables
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl Eq for Dictionary {}

impl Index<usize> for Dictionary {
    type Output = VariableDefinition;

    fn index(&self, column: usize) -> &Self::Output {
        &self.variables[column]
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a VariableDefinition;
    type IntoIter = core::slice::Iter<'a, VariableDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl FromIterator<VariableDefinition> for Dictionary {
    fn from_iter<I: IntoIterator<Item = VariableDefinition>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for variable in iter {
            dictionary.push(variable);
        }
        dictionary
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dictionary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariableKind;

    #[test]
    fn test_push_keeps_column_order() {
        let vars = [
            VariableDefinition::numeric("ID"),
            VariableDefinition::string("NAME", 16).with_label("Respondent name"),
            VariableDefinition::numeric("SCORE").with_formats(0, 0x050802, 0x050802),
        ];
        let mut dictionary = Dictionary::with_capacity(vars.len());
        for variable in vars.iter().cloned() {
            dictionary.push(variable);
        }

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.as_slice(), &vars[..]);
        assert_eq!(dictionary[1].kind, VariableKind::String);
        assert_eq!(dictionary.position("SCORE"), Some(2));
        assert_eq!(dictionary.get(3), None);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let dictionary: Dictionary = [
            VariableDefinition::numeric("X"),
            VariableDefinition::string("X", 4),
        ]
        .into_iter()
        .collect();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.position("X"), Some(0));
        assert_eq!(dictionary.get_by_name("X").map(|v| v.kind), Some(VariableKind::Numeric));
        assert_eq!(dictionary.position("Y"), None);
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let mut sized = Dictionary::with_capacity(64);
        sized.push(VariableDefinition::numeric("A"));
        let collected: Dictionary = [VariableDefinition::numeric("A")].into_iter().collect();
        assert_eq!(sized, collected);
        assert!(Dictionary::new().is_empty());
    }
}
