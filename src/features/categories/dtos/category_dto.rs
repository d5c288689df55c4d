use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryTranslation};
use crate::shared::localized::Localized;

/// Per-language name override carried alongside a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryTranslationDto {
    pub language_code: String,
    pub name: String,
}

impl From<CategoryTranslation> for CategoryTranslationDto {
    fn from(t: CategoryTranslation) -> Self {
        Self {
            language_code: t.language_code,
            name: t.name,
        }
    }
}

/// Response DTO for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub translations: Vec<CategoryTranslationDto>,
}

impl CategoryResponseDto {
    pub fn from_parts(c: Category, translations: Vec<CategoryTranslationDto>) -> Self {
        Self {
            id: c.id,
            parent_id: c.parent_id,
            name: c.name,
            slug: c.slug,
            icon: c.icon,
            display_order: c.display_order,
            translations,
        }
    }
}

impl Localized for CategoryResponseDto {
    fn base_value(&self) -> &str {
        &self.name
    }

    fn translation_for(&self, lang: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.language_code == lang)
            .map(|t| t.name.as_str())
    }
}

/// Category with its direct children materialized, for the navigation menu.
/// Children are plain categories; only one level of nesting is built.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HierarchicalCategoryDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub translations: Vec<CategoryTranslationDto>,
    pub sub_categories: Vec<CategoryResponseDto>,
}

impl HierarchicalCategoryDto {
    /// Build a rooted forest from a flat category list.
    ///
    /// Two linear passes: the first indexes every record by id, the second
    /// attaches each record to its parent's child list when the parent id is
    /// set and resolvable, and to the root list otherwise. A dangling parent
    /// reference therefore demotes nobody; the record simply becomes a root.
    ///
    /// Root and sibling ordering follow the input ordering. Cyclic input is
    /// not detected; parent pointers come from an acyclic hierarchy by
    /// construction (the admin console only ever creates two levels).
    pub fn build_forest(categories: Vec<CategoryResponseDto>) -> Vec<HierarchicalCategoryDto> {
        // Pass 1: index by id, one (initially empty) child list per record
        let index: HashMap<Uuid, usize> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        let mut children: Vec<Vec<CategoryResponseDto>> = vec![Vec::new(); categories.len()];

        // Pass 2: attach to parent when resolvable, else collect as root
        let mut root_positions: Vec<usize> = Vec::new();
        for (i, category) in categories.iter().enumerate() {
            match category.parent_id.and_then(|p| index.get(&p)) {
                Some(&parent_pos) => children[parent_pos].push(category.clone()),
                None => root_positions.push(i),
            }
        }

        root_positions
            .into_iter()
            .map(|i| {
                let c = categories[i].clone();
                HierarchicalCategoryDto {
                    id: c.id,
                    parent_id: c.parent_id,
                    name: c.name,
                    slug: c.slug,
                    icon: c.icon,
                    display_order: c.display_order,
                    translations: c.translations,
                    sub_categories: std::mem::take(&mut children[i]),
                }
            })
            .collect()
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// URL slug; generated from the name when omitted or blank
    pub slug: Option<String>,

    pub icon: Option<String>,

    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub display_order: i32,
}

/// Request DTO for updating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub slug: Option<String>,

    pub icon: Option<String>,

    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub display_order: i32,
}

/// One translation entry in a replace-translations request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslationEntryDto {
    #[validate(regex(
        path = *crate::shared::validation::LANGUAGE_CODE_REGEX,
        message = "Invalid language code"
    ))]
    pub language_code: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Request DTO replacing all per-language name overrides of an entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceTranslationsDto {
    #[validate(nested)]
    pub translations: Vec<TranslationEntryDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u128, parent: Option<u128>) -> CategoryResponseDto {
        CategoryResponseDto {
            id: Uuid::from_u128(id),
            parent_id: parent.map(Uuid::from_u128),
            name: format!("cat-{}", id),
            slug: format!("cat-{}", id),
            icon: None,
            display_order: 0,
            translations: Vec::new(),
        }
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(HierarchicalCategoryDto::build_forest(Vec::new()).is_empty());
    }

    #[test]
    fn null_parents_become_roots_in_input_order() {
        let forest = HierarchicalCategoryDto::build_forest(vec![
            category(2, None),
            category(1, None),
            category(3, None),
        ]);
        let ids: Vec<Uuid> = forest.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![Uuid::from_u128(2), Uuid::from_u128(1), Uuid::from_u128(3)]
        );
        assert!(forest.iter().all(|c| c.sub_categories.is_empty()));
    }

    #[test]
    fn children_attach_to_resolvable_parents() {
        // [{id:1,parent:null},{id:2,parent:1},{id:3,parent:99}]
        // -> [{id:1,children:[2]},{id:3,children:[]}]
        let forest = HierarchicalCategoryDto::build_forest(vec![
            category(1, None),
            category(2, Some(1)),
            category(3, Some(99)),
        ]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].id, Uuid::from_u128(1));
        assert_eq!(forest[0].sub_categories.len(), 1);
        assert_eq!(forest[0].sub_categories[0].id, Uuid::from_u128(2));
        assert_eq!(forest[1].id, Uuid::from_u128(3));
        assert!(forest[1].sub_categories.is_empty());
    }

    #[test]
    fn dangling_parent_is_fail_soft() {
        let forest =
            HierarchicalCategoryDto::build_forest(vec![category(7, Some(42))]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, Uuid::from_u128(7));
    }

    #[test]
    fn no_record_is_dropped_or_duplicated() {
        let input = vec![
            category(1, None),
            category(2, Some(1)),
            category(3, Some(1)),
            category(4, None),
            category(5, Some(4)),
            category(6, Some(99)),
        ];
        let n = input.len();
        let forest = HierarchicalCategoryDto::build_forest(input);

        let total: usize = forest
            .iter()
            .map(|root| 1 + root.sub_categories.len())
            .sum();
        assert_eq!(total, n);

        let mut seen: Vec<Uuid> = forest
            .iter()
            .flat_map(|root| {
                std::iter::once(root.id).chain(root.sub_categories.iter().map(|c| c.id))
            })
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), n);
    }

    #[test]
    fn attached_child_does_not_appear_in_root_list() {
        let forest =
            HierarchicalCategoryDto::build_forest(vec![category(1, None), category(2, Some(1))]);
        assert!(forest.iter().all(|root| root.id != Uuid::from_u128(2)));
    }

    #[test]
    fn sibling_order_follows_input_order() {
        let forest = HierarchicalCategoryDto::build_forest(vec![
            category(1, None),
            category(5, Some(1)),
            category(3, Some(1)),
            category(4, Some(1)),
        ]);
        let ids: Vec<Uuid> = forest[0].sub_categories.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![Uuid::from_u128(5), Uuid::from_u128(3), Uuid::from_u128(4)]
        );
    }
}
