//! Immutable entity tables the generators expand into documents.
//!
//! A [`Catalog`] is built once, validated for dangling references, and then
//! passed by reference to every assembler.

pub mod flora;
pub mod ore;
pub mod rock;
pub mod vein;

use crate::error::{GenError, Result};

use self::flora::{Berry, Crop, Forest, Fruit, Plant, Wood, BERRIES, CROPS, FORESTS, FRUITS, PLANTS, WOODS};
use self::ore::{Metal, Ore, METALS, ORES};
use self::rock::{Rock, ROCKS};
use self::vein::{builtin_veins, Vein};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub rocks: Vec<Rock>,
    pub metals: Vec<Metal>,
    pub ores: Vec<Ore>,
    pub veins: Vec<Vein>,
    pub plants: Vec<Plant>,
    pub crops: Vec<Crop>,
    pub berries: Vec<Berry>,
    pub fruits: Vec<Fruit>,
    pub woods: Vec<Wood>,
    pub forests: Vec<Forest>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        let catalog = Self {
            rocks: ROCKS.to_vec(),
            metals: METALS.to_vec(),
            ores: ORES.to_vec(),
            veins: builtin_veins()?,
            plants: PLANTS.to_vec(),
            crops: CROPS.to_vec(),
            berries: BERRIES.to_vec(),
            fruits: FRUITS.to_vec(),
            woods: WOODS.to_vec(),
            forests: FORESTS.to_vec(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Returns a copy of this catalog with `extra` appended to the vein table.
    pub fn with_veins(&self, extra: Vec<Vein>) -> Result<Self> {
        let mut catalog = self.clone();
        catalog.veins.extend(extra);
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        for metal in &self.metals {
            if let Some(target) = metal.melt_metal {
                self.metal(target)?;
            }
        }
        for ore in &self.ores {
            if let Some(metal) = ore.metal {
                self.metal(metal)?;
            }
        }
        for vein in &self.veins {
            let ore = self.ore(&vein.ore)?;
            if ore.graded && vein.grade.is_none() {
                return Err(GenError::MissingGrade {
                    vein: vein.name.clone(),
                    ore: ore.name.to_string(),
                });
            }
            self.expand_rocks(&vein.rocks)?;
        }
        for forest in &self.forests {
            self.wood(forest.tree)?;
        }
        Ok(())
    }

    pub fn expand_rocks<S: AsRef<str>>(&self, entries: &[S]) -> Result<Vec<&str>> {
        rock::expand_rocks(&self.rocks, entries)
    }

    pub fn ore(&self, name: &str) -> Result<&Ore> {
        self.ores
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| GenError::UnknownOre(name.to_string()))
    }

    pub fn metal(&self, name: &str) -> Result<&Metal> {
        self.metals
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| GenError::UnknownMetal(name.to_string()))
    }

    pub fn wood(&self, name: &str) -> Result<&Wood> {
        self.woods
            .iter()
            .find(|w| w.name == name)
            .ok_or_else(|| GenError::UnknownWood(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::vein::{Grade, Vein};
    use super::Catalog;
    use crate::error::GenError;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.expand_rocks(&["igneous_intrusive"]).unwrap().len(), 3);
        assert_eq!(catalog.ore("hematite").unwrap().metal, Some("cast_iron"));
    }

    #[test]
    fn lookup_errors_name_the_missing_key() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.ore("unobtainium").unwrap_err();
        assert!(matches!(err, GenError::UnknownOre(ref k) if k == "unobtainium"));
        assert!(catalog.metal("mithril").is_err());
        assert!(catalog.wood("ebony").is_err());
        assert!(matches!(catalog.expand_rocks(&["obsidian"]), Err(GenError::UnknownRock(_))));
    }

    #[test]
    fn extra_vein_with_unknown_ore_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let vein = Vein::builder("custom", "adamantite", 10, 10, 0, 20, 0.3, &["granite"])
            .build()
            .unwrap();
        let err = catalog.with_veins(vec![vein]).unwrap_err();
        assert!(err.to_string().contains("adamantite"));
    }

    #[test]
    fn extra_vein_with_unknown_rock_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let vein = Vein::builder("custom", "native_copper", 10, 10, 0, 20, 0.3, &["pumice"])
            .grade(Grade::POOR)
            .build()
            .unwrap();
        assert!(matches!(
            catalog.with_veins(vec![vein]),
            Err(GenError::UnknownRock(_))
        ));
    }

    #[test]
    fn graded_vein_without_grade_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let vein = Vein::builder("ungraded", "native_copper", 10, 10, 0, 20, 0.3, &["granite"])
            .build()
            .unwrap();
        assert!(matches!(
            catalog.with_veins(vec![vein]),
            Err(GenError::MissingGrade { .. })
        ));
    }
}
