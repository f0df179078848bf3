use crate::{model::Feature, model::Track, utils};

/// One value per tracked [`Feature`], iterated in [`Feature::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable<T> {
    values: [T; 12],
}

impl<T> FeatureTable<T> {
    pub fn from_fn(f: impl FnMut(Feature) -> T) -> Self {
        Self {
            values: Feature::ALL.map(f),
        }
    }

    pub fn get(&self, feature: Feature) -> &T {
        &self.values[feature as usize]
    }

    fn get_mut(&mut self, feature: Feature) -> &mut T {
        &mut self.values[feature as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, &T)> {
        Feature::ALL.into_iter().zip(self.values.iter())
    }
}

/// The track holding an extreme value of a feature.
///
/// `track_id` stays `None` (with an infinite value) when no track has the
/// feature set.
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub track_id: Option<String>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinMax {
    pub min: Extreme,
    pub max: Extreme,
}

impl Default for MinMax {
    fn default() -> Self {
        Self {
            min: Extreme {
                track_id: None,
                value: f64::INFINITY,
            },
            max: Extreme {
                track_id: None,
                value: f64::NEG_INFINITY,
            },
        }
    }
}

/// Single pass over `tracks` keeping the minimum and maximum of every feature.
///
/// Unset values are skipped for their feature only. Comparisons are strict,
/// so on ties the first track in iteration order keeps the slot.
pub(crate) fn find_min_max(tracks: &[Track]) -> FeatureTable<MinMax> {
    let mut table = FeatureTable::from_fn(|_| MinMax::default());

    for track in tracks {
        for feature in Feature::ALL {
            let Some(value) = track.value(feature) else {
                continue;
            };

            let entry = table.get_mut(feature);
            if value < entry.min.value {
                entry.min = Extreme {
                    track_id: Some(track.id.clone()),
                    value,
                };
            }
            if value > entry.max.value {
                entry.max = Extreme {
                    track_id: Some(track.id.clone()),
                    value,
                };
            }
        }
    }

    table
}

/// Average of every feature over `tracks`.
///
/// Sums skip unset values, but every sum is divided by the total number of
/// tracks. A feature missing on some tracks is therefore pulled towards zero.
/// `duration_ms` is floored to whole milliseconds, everything else is rounded
/// to five decimals.
pub(crate) fn find_averages(tracks: &[Track]) -> FeatureTable<f64> {
    let count = tracks.len() as f64;
    let mut sums = FeatureTable::from_fn(|_| 0.0_f64);

    for track in tracks {
        for feature in Feature::ALL {
            if let Some(value) = track.value(feature) {
                *sums.get_mut(feature) += value;
            }
        }
    }

    FeatureTable::from_fn(|feature| {
        let average = sums.get(feature) / count;
        match feature {
            Feature::DurationMs => average.floor(),
            _ => utils::round_to(average, 5),
        }
    })
}
