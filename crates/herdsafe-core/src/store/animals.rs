//! Animal store operations.

use super::{HerdStore, StoreError, StoreResult};
use crate::models::Animal;

impl HerdStore {
    /// Add an animal. Ids must be unique within the store.
    pub fn add_animal(&mut self, animal: Animal) -> StoreResult<()> {
        if self.get_animal(&animal.animal_id).is_some() {
            return Err(StoreError::DuplicateAnimal(animal.animal_id));
        }
        self.animals.push(animal);
        Ok(())
    }

    /// Look up an animal by id.
    pub fn get_animal(&self, animal_id: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.animal_id == animal_id)
    }

    pub(super) fn get_animal_mut(&mut self, animal_id: &str) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|a| a.animal_id == animal_id)
    }

    /// Animals belonging to a farmer.
    pub fn animals_for_farmer(&self, farmer: &str) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| a.farmer.as_deref() == Some(farmer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut store = HerdStore::new();
        let animal = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25));
        store.add_animal(animal).unwrap();

        let retrieved = store.get_animal("COW001").unwrap();
        assert_eq!(retrieved.name, "Bella");
        assert!(store.get_animal("COW999").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = HerdStore::new();
        store
            .add_animal(Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25)))
            .unwrap();

        let result =
            store.add_animal(Animal::new("COW001".into(), "Ganga".into(), "cow".into(), date(2024, 8, 28)));
        assert!(matches!(result, Err(StoreError::DuplicateAnimal(id)) if id == "COW001"));
    }

    #[test]
    fn test_animals_for_farmer() {
        let mut store = HerdStore::new();

        let mut bella = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25));
        bella.farmer = Some("Ram Kumar".into());
        let mut moti = Animal::new("BUF002".into(), "Moti".into(), "buffalo".into(), date(2024, 8, 15));
        moti.farmer = Some("Suresh Patil".into());

        store.add_animal(bella).unwrap();
        store.add_animal(moti).unwrap();

        let rams = store.animals_for_farmer("Ram Kumar");
        assert_eq!(rams.len(), 1);
        assert_eq!(rams[0].animal_id, "COW001");
    }
}
