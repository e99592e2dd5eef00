use crate::catalog::ore::{Ore, OreGrade};
use crate::catalog::vein::Vein;
use crate::document::vein::WeightedBlock;
use crate::error::{GenError, Result};

pub const DEPOSIT_WEIGHT: u32 = 10;

/// Weighted ore blocks a vein places into one host rock.
///
/// Graded ores list poor, normal and rich with the vein's grade weights
/// as-is, plus a deposit block when the vein has deposits. Minerals get a
/// single unweighted block.
pub fn build_ore_blocks(ns: &str, vein: &Vein, ore: &Ore, rock: &str) -> Result<Vec<WeightedBlock>> {
    if ore.is_mineral() {
        return Ok(vec![WeightedBlock::single(format!("{ns}:ore/{}/{rock}", ore.name))]);
    }

    let grade = vein.grade.ok_or_else(|| GenError::MissingGrade {
        vein: vein.name.clone(),
        ore: ore.name.to_string(),
    })?;
    let weights = [grade.poor, grade.normal, grade.rich];

    let mut blocks: Vec<_> = OreGrade::ALL
        .iter()
        .zip(weights)
        .map(|(g, weight)| {
            WeightedBlock::weighted(weight, format!("{ns}:ore/{}_{}/{rock}", g.name(), ore.name))
        })
        .collect();
    if vein.deposits {
        blocks.push(WeightedBlock::weighted(
            DEPOSIT_WEIGHT,
            format!("{ns}:deposit/{}/{rock}", ore.name),
        ));
    }
    Ok(blocks)
}

/// Converts a density percentage to a probability rounded to two places.
///
/// Rounding works on the exact decimal value of `percent * 0.01`, with exact
/// ties going to the even digit, so `12.5` gives `0.12` and `1.5` gives `0.01`.
pub fn vein_density(percent: f64) -> Result<f64> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(GenError::DensityPercent(percent));
    }
    format!("{:.2}", percent * 0.01)
        .parse()
        .map_err(|_| GenError::DensityPercent(percent))
}
