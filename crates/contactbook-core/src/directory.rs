use crate::domain::Record;
use crate::error::CoreError;
use std::collections::HashMap;

/// Name-keyed collection of records that remembers insertion order.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. An existing record with the same name is
    /// replaced in place and keeps its position in `values()`.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        self.index
            .get(name)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        match self.index.get(name) {
            Some(&position) => Ok(&mut self.records[position]),
            None => Err(CoreError::ContactNotFound(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn values(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Directory;
    use crate::domain::{PhoneNumber, Record};
    use crate::error::CoreError;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).expect("record");
        record.add_phone(PhoneNumber::parse(phone).expect("phone"));
        record
    }

    #[test]
    fn find_missing_name_is_not_found() {
        let directory = Directory::new();
        assert_eq!(
            directory.find("Ada").unwrap_err(),
            CoreError::ContactNotFound("Ada".to_string())
        );
        assert!(!directory.contains("Ada"));
    }

    #[test]
    fn find_mut_changes_are_visible() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        directory
            .find_mut("Ada")
            .unwrap()
            .add_phone(PhoneNumber::parse("2222222222").unwrap());
        assert_eq!(
            directory.find("Ada").unwrap().format_phones(),
            "1111111111; 2222222222"
        );
    }

    #[test]
    fn duplicate_name_replaces_in_place() {
        let mut directory = Directory::new();
        directory.add_record(record("Ada", "1111111111"));
        directory.add_record(record("Bob", "2222222222"));
        directory.add_record(record("Ada", "3333333333"));

        assert_eq!(directory.len(), 2);
        let names: Vec<_> = directory.values().map(Record::name).collect();
        assert_eq!(names, vec!["Ada", "Bob"]);
        assert_eq!(directory.find("Ada").unwrap().format_phones(), "3333333333");
    }
}
