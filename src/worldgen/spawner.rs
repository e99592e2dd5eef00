use crate::document::biome::Spawner;

/// `(entity, weight, min_count, max_count)`. Entities without a domain
/// belong to the generated namespace.
pub type Entry = (&'static str, u32, u32, u32);

pub const SALT_MARSH_AMBIENT: &[Entry] = &[
    ("isopod", 1, 1, 4),
    ("lobster", 1, 1, 4),
    ("horseshoe_crab", 1, 1, 4),
    ("salmon", 1, 1, 4),
];

pub const OCEAN_AMBIENT: &[Entry] = &[
    ("isopod", 1, 1, 4),
    ("lobster", 1, 1, 4),
    ("horseshoe_crab", 1, 1, 4),
    ("cod", 10, 1, 4),
    ("pufferfish", 1, 1, 2),
    ("tropical_fish", 10, 1, 6),
    ("jellyfish", 1, 2, 6),
];

pub const OCEAN_CREATURES: &[Entry] = &[
    ("orca", 1, 1, 3),
    ("dolphin", 1, 1, 3),
    ("squid", 2, 1, 3),
];

pub const UNDERGROUND_WATER_CREATURES: &[Entry] = &[("octopoteuthis", 1, 1, 2)];

pub const LAKE_AMBIENT: &[Entry] = &[
    ("bluegill", 10, 2, 4),
    ("crappie", 10, 2, 4),
    ("largemouth_bass", 10, 2, 4),
    ("salmon", 10, 2, 4),
    ("smallmouth_bass", 10, 2, 4),
    ("crayfish", 5, 1, 4),
];

pub const RIVER_AMBIENT: &[Entry] = &[("lake_trout", 10, 2, 4), ("rainbow_trout", 10, 2, 4)];

pub const LAKE_CREATURES: &[Entry] = &[("manatee", 1, 1, 2)];

pub const SHORE_CREATURES: &[Entry] = &[("penguin", 10, 2, 5), ("turtle", 10, 2, 5)];

pub const LAND_CREATURES: &[Entry] = &[
    ("crocodile", 20, 1, 1),
    ("pig", 1, 1, 4),
    ("cow", 1, 1, 4),
    ("goat", 1, 1, 4),
    ("yak", 1, 1, 4),
    ("alpaca", 1, 1, 4),
    ("sheep", 1, 1, 4),
    ("musk_ox", 1, 1, 4),
    ("chicken", 1, 2, 6),
    ("duck", 1, 2, 6),
    ("quail", 1, 2, 6),
    ("polar_bear", 2, 1, 1),
    ("grizzly_bear", 2, 1, 1),
    ("black_bear", 2, 1, 1),
    ("lion", 2, 1, 3),
    ("sabertooth", 2, 1, 1),
    ("tiger", 2, 1, 1),
    ("rabbit", 3, 1, 4),
    ("fox", 1, 1, 1),
    ("panda", 1, 3, 5),
    ("boar", 2, 1, 2),
    ("wildebeest", 2, 1, 2),
    ("moose", 1, 1, 1),
    ("bongo", 3, 2, 4),
    ("caribou", 3, 2, 4),
    ("deer", 3, 2, 4),
    ("gazelle", 3, 2, 4),
    ("grouse", 1, 2, 4),
    ("pheasant", 1, 2, 4),
    ("turkey", 1, 2, 4),
    ("peafowl", 1, 2, 4),
    ("wolf", 1, 6, 9),
    ("hyena", 1, 5, 9),
    ("direwolf", 1, 3, 7),
    ("donkey", 1, 1, 3),
    ("horse", 1, 1, 3),
    ("ocelot", 1, 1, 3),
    ("frog", 1, 2, 4),
];

pub const VANILLA_MONSTERS: &[Entry] = &[
    ("minecraft:spider", 100, 4, 4),
    ("minecraft:zombie", 95, 4, 4),
    ("minecraft:skeleton", 100, 4, 4),
    ("minecraft:creeper", 100, 4, 4),
    ("minecraft:slime", 100, 4, 4),
];

pub fn spawners(ns: &str, table: &[Entry]) -> Vec<Spawner> {
    table
        .iter()
        .map(|&(entity, weight, min_count, max_count)| Spawner {
            entity: if entity.contains(':') {
                entity.to_string()
            } else {
                format!("{ns}:{entity}")
            },
            weight,
            min_count,
            max_count,
        })
        .collect()
}
