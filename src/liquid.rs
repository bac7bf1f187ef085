//! Tipos de liquidos, bebidas y temperaturas
use std::fmt;

use serde::{Deserialize, Serialize};

/// Liquido que puede haber dentro de un contenedor. `None` representa la ausencia de liquido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidType {
    None,
    Tea,
    Milk,
    Water,
    MilkTea,
    Mixed,
    Coffee,
    CafeLatte,
}

impl LiquidType {
    pub fn name(&self) -> &'static str {
        match self {
            LiquidType::None => "None",
            LiquidType::Tea => "Tea",
            LiquidType::Milk => "Milk",
            LiquidType::Water => "Water",
            LiquidType::MilkTea => "MilkTea",
            LiquidType::Mixed => "Mixed",
            LiquidType::Coffee => "Coffee",
            LiquidType::CafeLatte => "CafeLatte",
        }
    }
}

impl fmt::Display for LiquidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bebidas que se pueden pedir en una tarea
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DrinkType {
    None,
    Tea,
    Milk,
    MilkTea,
    Coffee,
    CafeLatte,
}

impl DrinkType {
    /// Bebidas que pueden aparecer en una tarea
    pub const ORDERABLE: [DrinkType; 5] = [
        DrinkType::Tea,
        DrinkType::Milk,
        DrinkType::MilkTea,
        DrinkType::Coffee,
        DrinkType::CafeLatte,
    ];

    /// Bebida que representa un liquido resuelto. Agua, mezclas sin receta y
    /// contenedores vacios no se pueden servir.
    pub fn from_liquid(liquid: LiquidType) -> DrinkType {
        match liquid {
            LiquidType::Tea => DrinkType::Tea,
            LiquidType::Milk => DrinkType::Milk,
            LiquidType::MilkTea => DrinkType::MilkTea,
            LiquidType::Coffee => DrinkType::Coffee,
            LiquidType::CafeLatte => DrinkType::CafeLatte,
            LiquidType::Water | LiquidType::Mixed | LiquidType::None => DrinkType::None,
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Temperatura de una bebida. `Any` solo tiene sentido como requisito de una tarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkTemperature {
    Hot,
    Cold,
    Any,
}

impl DrinkTemperature {
    /// Temperatura observada de un contenedor: con hielo es fria, sin hielo caliente
    pub fn from_ice(has_ice: bool) -> DrinkTemperature {
        if has_ice {
            DrinkTemperature::Cold
        } else {
            DrinkTemperature::Hot
        }
    }

    /// Indica si una bebida entregada a `delivered` cumple con este requisito
    pub fn accepts(&self, delivered: DrinkTemperature) -> bool {
        *self == DrinkTemperature::Any || *self == delivered
    }
}

impl fmt::Display for DrinkTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_servable_liquids_to_drinks() {
        assert_eq!(DrinkType::MilkTea, DrinkType::from_liquid(LiquidType::MilkTea));
        assert_eq!(DrinkType::CafeLatte, DrinkType::from_liquid(LiquidType::CafeLatte));
        assert_eq!(DrinkType::Tea, DrinkType::from_liquid(LiquidType::Tea));
    }

    #[test]
    fn should_not_map_water_or_mixtures() {
        assert_eq!(DrinkType::None, DrinkType::from_liquid(LiquidType::Water));
        assert_eq!(DrinkType::None, DrinkType::from_liquid(LiquidType::Mixed));
        assert_eq!(DrinkType::None, DrinkType::from_liquid(LiquidType::None));
    }

    #[test]
    fn should_derive_temperature_from_ice() {
        assert_eq!(DrinkTemperature::Cold, DrinkTemperature::from_ice(true));
        assert_eq!(DrinkTemperature::Hot, DrinkTemperature::from_ice(false));
    }

    #[test]
    fn should_accept_any_temperature_only_as_wildcard() {
        assert_eq!(true, DrinkTemperature::Any.accepts(DrinkTemperature::Cold));
        assert_eq!(true, DrinkTemperature::Hot.accepts(DrinkTemperature::Hot));
        assert_eq!(false, DrinkTemperature::Hot.accepts(DrinkTemperature::Cold));
    }
}
