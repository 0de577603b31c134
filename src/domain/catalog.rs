use crate::domain::model::{Item, ItemId};
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{self, Validate};

/// Read-only, ordered list of purchasable items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Builds a catalog and validates it in one step.
    pub fn try_new(items: Vec<Item>) -> Result<Self> {
        let catalog = Self::new(items);
        catalog.validate()?;
        Ok(catalog)
    }

    /// The ten-car showroom the shop ships with.
    pub fn showroom() -> Self {
        let car = |id: u32, name: &str, price: u64, color: &str, image: &str| Item {
            id: ItemId(id),
            name: name.to_string(),
            price,
            color: color.to_string(),
            image: image.to_string(),
        };

        Self::new(vec![
            car(1, "Tesla Model S", 1_200_000, "Red", "https://platform.theverge.com/wp-content/uploads/sites/2/chorus/uploads/chorus_asset/file/15540847/tesla-model-s.0.0.1445023528.jpg"),
            car(2, "BMW M4 Coupe", 1_350_000, "Blue", "https://cdn.motor1.com/images/mgl/A9BQL/s1/2021-bmw-m4-exterior.jpg"),
            car(3, "Ford Mustang GT", 1_100_000, "Black", "https://d1gl66oyi6i593.cloudfront.net/wp-content/uploads/2020/02/Ford-Mustang-Shelby-GT350-de-Fathouse-1.jpg"),
            car(4, "Lamborghini Huracan", 4_500_000, "Yellow", "https://www.imc.co.th/img/model/640_2022120415212068.jpg"),
            car(5, "Audi R8", 3_000_000, "White", "https://hips.hearstapps.com/hmg-prod/images/2023-audi-r8-gt-front-three-quarters-motion-3-1664827965.jpg"),
            car(6, "Mercedes-Benz AMG GT", 2_500_000, "Silver", "https://vehicle-images.dealerinspire.com/10a0-11000427/W1KRJ7JB5SF005620/09cae414d9a5861280a1b8dcfca3b8e4.jpg"),
            car(7, "Chevrolet Camaro", 1_050_000, "Orange", "https://di-uploads-pod33.dealerinspire.com/kearnymesachevy/uploads/2022/11/2023-chevy-camaro-orange.png"),
            car(8, "Porsche 911", 3_200_000, "Gray", "https://issimi-vehicles-cdn.b-cdn.net/publicamlvehiclemanagement/VehicleDetails/315/1.jpg"),
            car(9, "Nissan GT-R", 2_200_000, "Dark Gray", "https://static.republika.co.id/uploads/member/images/news/240316120642-273.jpg"),
            car(10, "Ferrari F8 Tributo", 5_000_000, "Red", "https://www.charles-pozzi.fr/wp-content/uploads/cp_images//1701126000/photo/1479/1/2223_2.jpg"),
        ])
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn require(&self, id: ItemId) -> Result<&Item> {
        self.find(id).ok_or(ShopError::ItemNotFound { id })
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validation::validate_unique("items.id", self.items.iter().map(|item| item.id))?;

        for item in &self.items {
            validation::validate_non_empty_string(&format!("items[{}].name", item.id), &item.name)?;
            validation::validate_non_empty_string(&format!("items[{}].color", item.id), &item.color)?;
            validation::validate_image_reference(&format!("items[{}].image", item.id), &item.image)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showroom_is_valid() {
        let catalog = Catalog::showroom();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.find(ItemId(5)).map(|i| i.name.as_str()), Some("Audi R8"));
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = Catalog::showroom();
        match catalog.require(ItemId(99)) {
            Err(ShopError::ItemNotFound { id }) => assert_eq!(id, ItemId(99)),
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut items = Catalog::showroom().items().to_vec();
        items[1].id = ItemId(1);
        assert!(Catalog::try_new(items).is_err());
    }
}
