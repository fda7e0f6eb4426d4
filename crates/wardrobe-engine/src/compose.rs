use rand::Rng;
use wardrobe_types::{ClothingItem, ItemType, Outfit, Season};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// No catalog item of this type is eligible for the season
    #[error("no {slot} available for {season}")]
    EmptyPool { slot: ItemType, season: Season },
}

/// Draw one top, one bottom and one pair of shoes eligible for `season`.
///
/// Each slot is drawn independently and uniformly from its pool. Fails as a whole
/// when any pool is empty; no partial outfit is ever produced.
pub fn generate_outfit<R>(
    catalog: &[ClothingItem],
    season: Season,
    rng: &mut R,
) -> Result<Outfit, ComposeError>
where
    R: Rng + ?Sized,
{
    let seasonal: Vec<&ClothingItem> = catalog
        .iter()
        .filter(|item| item.is_in_season(season))
        .collect();

    let pools = ItemType::SLOTS.map(|slot| pool(&seasonal, slot));
    if let Some(slot) = ItemType::SLOTS
        .iter()
        .zip(&pools)
        .find_map(|(slot, pool)| pool.is_empty().then_some(*slot))
    {
        return Err(ComposeError::EmptyPool { slot, season });
    }

    let [tops, bottoms, shoes] = pools;
    Ok(Outfit::new(
        draw(&tops, rng).clone(),
        draw(&bottoms, rng).clone(),
        draw(&shoes, rng).clone(),
    ))
}

fn pool<'a>(seasonal: &[&'a ClothingItem], slot: ItemType) -> Vec<&'a ClothingItem> {
    seasonal
        .iter()
        .copied()
        .filter(|item| item.kind == slot)
        .collect()
}

// Pool must be non-empty
fn draw<'a, R>(pool: &[&'a ClothingItem], rng: &mut R) -> &'a ClothingItem
where
    R: Rng + ?Sized,
{
    pool[rng.random_range(0..pool.len())]
}
