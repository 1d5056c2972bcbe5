//! User-visible strings

use serde::{Deserialize, Serialize};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

/// Every string the render layer shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub all_categories: &'static str,
    pub favorites_title: &'static str,
    pub category_title_prefix: &'static str,
    pub no_description: &'static str,
    pub no_results: &'static str,
    pub visit_site: &'static str,
    pub add_favorite: &'static str,
    pub remove_favorite: &'static str,
    pub load_failed: &'static str,
}

impl Labels {
    pub const EN: Labels = Labels {
        all_categories: "All",
        favorites_title: "Favorite tools",
        category_title_prefix: "Category: ",
        no_description: "No description",
        no_results: "No matching tools found",
        visit_site: "Visit site",
        add_favorite: "Add to favorites",
        remove_favorite: "Remove from favorites",
        load_failed: "Failed to load data, please refresh the page and try again",
    };

    pub const ZH_CN: Labels = Labels {
        all_categories: "全部",
        favorites_title: "收藏的工具",
        category_title_prefix: "分类：",
        no_description: "暂无描述",
        no_results: "没有找到匹配的工具",
        visit_site: "访问网站",
        add_favorite: "添加到收藏夹",
        remove_favorite: "取消收藏",
        load_failed: "数据加载失败，请刷新页面重试",
    };

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::EN,
            Locale::ZhCn => Self::ZH_CN,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::EN
    }
}
