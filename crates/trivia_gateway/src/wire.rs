//! JSON shapes served by the question API and their conversion into core types.
//!
//! The server is loose about a few fields: `categories` arrives either keyed
//! by id or as a plain list, and `current_category` may be an object, `null`
//! or an empty string. All of these are accepted here.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use trivia_core::{Category, CategoryId, Question, QuestionPage};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoryDto {
    id: CategoryId,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionDto {
    id: u64,
    question: String,
    answer: String,
    category: CategoryDto,
    difficulty: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CategoryDirectoryDto {
    Keyed(HashMap<String, CategoryDto>),
    Listed(Vec<CategoryDto>),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionPageDto {
    questions: Vec<QuestionDto>,
    total_questions: u32,
    #[serde(default)]
    categories: Option<CategoryDirectoryDto>,
    #[serde(default, deserialize_with = "lenient_category")]
    current_category: Option<CategoryDto>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBody<'a> {
    pub search_term: &'a str,
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<CategoryDto>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(value @ serde_json::Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category::new(dto.id, dto.kind)
    }
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Question {
            id: dto.id,
            question: dto.question,
            answer: dto.answer,
            category: dto.category.into(),
            difficulty: dto.difficulty,
        }
    }
}

impl CategoryDirectoryDto {
    fn into_directory(self) -> BTreeMap<CategoryId, Category> {
        let categories: Vec<CategoryDto> = match self {
            CategoryDirectoryDto::Keyed(map) => map.into_values().collect(),
            CategoryDirectoryDto::Listed(list) => list,
        };
        categories
            .into_iter()
            .map(|dto| (dto.id, Category::from(dto)))
            .collect()
    }
}

impl QuestionPageDto {
    /// Converts into a core page. Only the unfiltered list refreshes the
    /// category directory, even when the server sends one along, and a list
    /// without a `categories` field keeps the directory already known.
    pub(crate) fn into_page(self, with_directory: bool) -> QuestionPage {
        QuestionPage {
            questions: self.questions.into_iter().map(Question::from).collect(),
            total_questions: self.total_questions,
            categories: self
                .categories
                .filter(|_| with_directory)
                .map(CategoryDirectoryDto::into_directory),
            current_category: self.current_category.map(Category::from),
        }
    }
}
