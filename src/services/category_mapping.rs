use std::collections::HashMap;

use crate::models::plan::InterestCategory;

/// Search keywords for each interest category.
#[derive(Debug, Clone)]
pub struct CategoryMapping {
    keywords: HashMap<InterestCategory, Vec<String>>,
}

impl Default for CategoryMapping {
    fn default() -> Self {
        let culture = ["museum", "teater", "bibliotek", "konst"];
        let table: [(InterestCategory, &[&str]); 7] = [
            (InterestCategory::Museum, &culture),
            (
                InterestCategory::FamilyFriendly,
                &[
                    "lekland",
                    "djurpark",
                    "nöjespark",
                    "bad",
                    "inomhuslek",
                    "familjeaktivitet",
                ],
            ),
            (
                InterestCategory::Nature,
                &["park", "natur", "reservat", "promenad"],
            ),
            (
                InterestCategory::FoodAndDrink,
                &["restaurang", "cafe", "bageri", "bar"],
            ),
            (
                InterestCategory::Shopping,
                &["shopping", "galleria", "kläder"],
            ),
            (
                InterestCategory::Sport,
                &["sport", "gym", "bowling", "simhall"],
            ),
            (InterestCategory::Culture, &culture),
        ];

        Self::new(table.into_iter().map(|(category, words)| {
            (category, words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
        }))
    }
}

impl CategoryMapping {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (InterestCategory, Vec<String>)>,
    {
        Self {
            keywords: entries.into_iter().collect(),
        }
    }

    pub fn keywords_for(&self, category: InterestCategory) -> &[String] {
        self.keywords
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Expands interest category labels into search keywords, in input order.
    /// Labels that are not a known category are passed through unchanged.
    pub fn map_interest_categories<S: AsRef<str>>(&self, categories: &[S]) -> Vec<String> {
        categories
            .iter()
            .flat_map(|label| {
                let label = label.as_ref();
                match InterestCategory::from_label(label) {
                    Some(category) if self.keywords.contains_key(&category) => {
                        self.keywords_for(category).to_vec()
                    }
                    _ => vec![label.to_string()],
                }
            })
            .collect()
    }
}
