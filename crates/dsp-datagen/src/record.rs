use crate::error::DatagenError;
use crate::ident;
use dsp_datagen_toml::Language;
use std::collections::HashMap;

/// One entity of a category: its number, both display names, and the derived identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub number: u32,
    pub primary_name: String,
    pub secondary_name: String,
    /// Derived from `primary_name` alone.
    pub id: String,
}

impl Record {
    /// Builds a record, deriving and checking its identifier.
    pub fn new(
        number: u32,
        primary_name: impl Into<String>,
        secondary_name: impl Into<String>,
    ) -> Result<Self, DatagenError> {
        let primary_name = primary_name.into();
        let id = ident::derive(&primary_name);

        if !ident::is_valid_identifier(&id) {
            return Err(DatagenError::InvalidIdentifier {
                name: primary_name,
                id,
            });
        }

        Ok(Self {
            number,
            primary_name,
            secondary_name: secondary_name.into(),
            id,
        })
    }

    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Primary => &self.primary_name,
            Language::Secondary => &self.secondary_name,
        }
    }
}

/// Fails if two records of a category share an identifier or a number.
///
/// Either would leave the generated enumeration with two variants of the same
/// name or the same discriminant.
pub fn check_unique(records: &[Record], category: &str) -> Result<(), DatagenError> {
    let mut ids: HashMap<&str, &Record> = HashMap::new();
    let mut numbers: HashMap<u32, &Record> = HashMap::new();

    for record in records {
        if let Some(first) = ids.insert(&record.id, record) {
            return Err(DatagenError::IdentifierCollision {
                category: category.to_string(),
                id: record.id.clone(),
                first: first.primary_name.clone(),
                second: record.primary_name.clone(),
            });
        }
        if let Some(first) = numbers.insert(record.number, record) {
            return Err(DatagenError::DuplicateNumber {
                category: category.to_string(),
                number: record.number,
                first: first.primary_name.clone(),
                second: record.primary_name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: u32, name: &str) -> Record {
        Record::new(number, name, name).unwrap()
    }

    #[test]
    fn test_new_derives_id() {
        let record = Record::new(1101, "Iron Ingot", "铁块").unwrap();
        assert_eq!(record.id, "IronIngot");
        assert_eq!(record.name(Language::Primary), "Iron Ingot");
        assert_eq!(record.name(Language::Secondary), "铁块");
    }

    #[test]
    fn test_new_rejects_invalid_id() {
        let err = Record::new(1, "Dyson's Sphere", "x").unwrap_err();
        assert!(matches!(
            err,
            DatagenError::InvalidIdentifier { ref id, .. } if id == "Dyson'sSphere"
        ));
    }

    #[test]
    fn test_check_unique_accepts_distinct() {
        let records = vec![record(1, "Iron Ingot"), record(2, "Copper Ingot")];
        assert!(check_unique(&records, "items").is_ok());
    }

    #[test]
    fn test_check_unique_collision() {
        let records = vec![record(1, "Iron-Ingot"), record(2, "Iron Ingot")];
        let err = check_unique(&records, "items").unwrap_err();
        assert_eq!(
            err.to_string(),
            "items: 'Iron-Ingot' and 'Iron Ingot' both map to identifier 'IronIngot'"
        );
    }

    #[test]
    fn test_check_unique_duplicate_number() {
        let records = vec![record(7, "Iron Ingot"), record(7, "Copper Ingot")];
        assert!(matches!(
            check_unique(&records, "items"),
            Err(DatagenError::DuplicateNumber { number: 7, .. })
        ));
    }
}
