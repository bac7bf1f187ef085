//! Lectura de la configuracion de la sesion desde un archivo JSON
use std::{fs::File, io::BufReader, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::{
    constants::{DELIVERY_THRESHOLD, SECONDS_TO_FILL, STARTING_LEVEL},
    errors::BarError,
    liquid::LiquidType,
    recipes::{RecipeBook, RecipeEntry},
    rewards::{RewardRule, RewardTable},
    task_ledger::BatchSettings,
};

/// Configuracion de una sesion. Todos los campos son opcionales.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub batch: BatchSettings,
    pub starting_level: u32,
    pub delivery_threshold: f64,
    pub seconds_to_fill: f64,
    pub rng_seed: Option<u64>,
    /// Recetas que se agregan a las canonicas
    pub recipes: Vec<RecipeEntry>,
    /// Reglas de puntaje que reemplazan a las canonicas de la misma bebida
    pub rewards: Vec<RewardRule>,
}

impl Default for BarConfig {
    fn default() -> BarConfig {
        BarConfig {
            batch: BatchSettings::default(),
            starting_level: STARTING_LEVEL,
            delivery_threshold: DELIVERY_THRESHOLD,
            seconds_to_fill: SECONDS_TO_FILL,
            rng_seed: None,
            recipes: Vec::new(),
            rewards: Vec::new(),
        }
    }
}

impl BarConfig {
    pub fn validate(&self) -> Result<(), BarError> {
        if !(self.delivery_threshold > 0.0 && self.delivery_threshold <= 1.0) {
            return Err(BarError::InvalidConfiguration(format!(
                "delivery_threshold must be in (0, 1], got {}",
                self.delivery_threshold
            )));
        }
        if !(self.seconds_to_fill > 0.0) {
            return Err(BarError::InvalidConfiguration(format!(
                "seconds_to_fill must be positive, got {}",
                self.seconds_to_fill
            )));
        }
        if self.batch.units_per_task == 0 {
            return Err(BarError::InvalidConfiguration(
                "units_per_task must be at least 1".to_string(),
            ));
        }
        for recipe in self.recipes.iter() {
            validate_recipe(recipe)?;
        }
        Ok(())
    }

    pub fn recipe_book(&self) -> RecipeBook {
        let mut book = RecipeBook::default();
        book.add_entries(&self.recipes);
        book
    }

    pub fn reward_table(&self) -> RewardTable {
        let mut table = RewardTable::default();
        for rule in self.rewards.iter() {
            table.insert(rule.clone());
        }
        table
    }
}

fn validate_recipe(recipe: &RecipeEntry) -> Result<(), BarError> {
    if recipe.ingredients.contains(&LiquidType::None) {
        return Err(BarError::InvalidConfiguration(format!(
            "recipe for {} cannot list None as an ingredient",
            recipe.result
        )));
    }
    let mut ingredients: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|liquid| liquid.name())
        .collect();
    ingredients.sort_unstable();
    ingredients.dedup();
    if ingredients.len() < 2 {
        return Err(BarError::InvalidConfiguration(format!(
            "recipe for {} needs at least two distinct ingredients",
            recipe.result
        )));
    }
    if recipe.result == LiquidType::None {
        return Err(BarError::InvalidConfiguration(
            "recipe result cannot be None".to_string(),
        ));
    }
    Ok(())
}

pub fn parse_config(json: &str) -> Result<BarConfig, BarError> {
    let config: BarConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

pub fn read_config_from_file<P: AsRef<Path>>(path: P) -> Result<BarConfig, BarError> {
    debug!("[CONFIG] Reading {}", path.as_ref().display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: BarConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    info!(
        "[CONFIG] Loaded {} extra recipes and {} reward rules",
        config.recipes.len(),
        config.rewards.len()
    );
    Ok(config)
}
