use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeCategory {
    None,
    Beach,
    Ocean,
    River,
    Lake,
    Swamp,
    Plains,
    Mesa,
    ExtremeHills,
    Forest,
    Taiga,
    Savanna,
    Jungle,
    Desert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnCategory {
    Monster,
    Creature,
    Ambient,
    WaterCreature,
    UndergroundWaterCreature,
    WaterAmbient,
    Misc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spawner {
    #[serde(rename = "type")]
    pub entity: String,
    pub weight: u32,
    #[serde(rename = "minCount")]
    pub min_count: u32,
    #[serde(rename = "maxCount")]
    pub max_count: u32,
}

/// Spawner lists keyed by category. Each category is a single slot: setting
/// it again replaces the list but keeps the slot where it was first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spawners {
    slots: Vec<(SpawnCategory, Vec<Spawner>)>,
}

impl Spawners {
    pub fn set(&mut self, category: SpawnCategory, spawners: Vec<Spawner>) {
        match self.slots.iter_mut().find(|(c, _)| *c == category) {
            Some(slot) => slot.1 = spawners,
            None => self.slots.push((category, spawners)),
        }
    }

    /// Appends to the slot instead of replacing it.
    pub fn extend(&mut self, category: SpawnCategory, spawners: Vec<Spawner>) {
        match self.slots.iter_mut().find(|(c, _)| *c == category) {
            Some(slot) => slot.1.extend(spawners),
            None => self.slots.push((category, spawners)),
        }
    }

    pub fn get(&self, category: SpawnCategory) -> Option<&[Spawner]> {
        self.slots
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| s.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = SpawnCategory> + '_ {
        self.slots.iter().map(|(c, _)| *c)
    }
}

impl Serialize for Spawners {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (category, spawners) in &self.slots {
            map.serialize_entry(category, spawners)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnCost {
    pub energy_budget: f64,
    pub charge: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiomeEffects {
    pub fog_color: u32,
    pub sky_color: u32,
    pub water_color: u32,
    pub water_fog_color: u32,
}

impl Default for BiomeEffects {
    fn default() -> Self {
        Self {
            fog_color: 0xC0D8FF,
            sky_color: 0x84E6FF,
            water_color: 0x3F76E4,
            water_fog_color: 0x050533,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carvers {
    pub air: Vec<String>,
    pub liquid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiomeDocument {
    pub has_precipitation: bool,
    pub category: BiomeCategory,
    pub temperature: f64,
    pub temperature_modifier: String,
    pub downfall: f64,
    pub effects: BiomeEffects,
    pub carvers: Carvers,
    pub features: Vec<String>,
    pub starts: Vec<String>,
    pub spawners: Spawners,
    pub player_spawn_friendly: bool,
    pub creature_spawn_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub spawn_costs: BTreeMap<String, SpawnCost>,
}

#[cfg(test)]
mod tests {
    use super::{BiomeEffects, SpawnCategory, Spawner, Spawners};

    fn spawner(entity: &str) -> Spawner {
        Spawner {
            entity: entity.to_string(),
            weight: 1,
            min_count: 1,
            max_count: 4,
        }
    }

    #[test]
    fn overwritten_slot_keeps_first_position() {
        let mut spawners = Spawners::default();
        spawners.set(SpawnCategory::WaterAmbient, vec![spawner("tfc:cod")]);
        spawners.set(SpawnCategory::WaterCreature, vec![spawner("tfc:orca")]);
        spawners.set(SpawnCategory::WaterAmbient, vec![spawner("tfc:salmon")]);

        let order: Vec<_> = spawners.categories().collect();
        assert_eq!(order, vec![SpawnCategory::WaterAmbient, SpawnCategory::WaterCreature]);
        assert_eq!(spawners.get(SpawnCategory::WaterAmbient).unwrap()[0].entity, "tfc:salmon");

        let text = serde_json::to_string(&spawners).unwrap();
        assert!(text.starts_with(r#"{"water_ambient":[{"type":"tfc:salmon","weight":1,"minCount":1,"maxCount":4}]"#));
    }

    #[test]
    fn default_effect_colours() {
        let effects = BiomeEffects::default();
        assert_eq!(effects.fog_color, 12638463);
        assert_eq!(effects.sky_color, 8709887);
        assert_eq!(effects.water_color, 4159204);
        assert_eq!(effects.water_fog_color, 329011);
    }
}
