//! Key paths used by the site's views.
//!
//! Views resolve through these constants rather than ad hoc strings, so the
//! full set can be checked against the default dictionary in tests.

// ==================== Document ====================
pub const META_TITLE: &str = "meta.title";
pub const META_DESCRIPTION: &str = "meta.description";

// ==================== Navigation ====================
pub const NAV_HOW_IT_WORKS: &str = "nav.howItWorks";
pub const NAV_ECOSYSTEM: &str = "nav.ecosystem";
pub const NAV_NEWS: &str = "nav.news";
pub const NAV_LOGIN: &str = "nav.login";
pub const NAV_INSTALL: &str = "nav.install";
pub const NAV_LANGUAGE: &str = "nav.language";

// ==================== Hero ====================
pub const HERO_HEADLINE: &str = "hero.headline";
pub const HERO_SUBHEADLINE: &str = "hero.subheadline";
pub const HERO_PRIMARY_CTA: &str = "hero.primaryCta";
pub const HERO_SECONDARY_CTA_INSTALL: &str = "hero.secondaryCta1";
pub const HERO_SECONDARY_CTA_LOGIN: &str = "hero.secondaryCta2";

// ==================== Sections ====================
pub const WHAT_IS_TITLE: &str = "whatIs.title";
pub const WHAT_IS_DESCRIPTION: &str = "whatIs.description";

pub const GLOBAL_VISION_TITLE: &str = "globalVision.title";
pub const GLOBAL_VISION_HEADLINE: &str = "globalVision.headline";
pub const GLOBAL_VISION_DESCRIPTION: &str = "globalVision.description";
pub const GLOBAL_VISION_POINTS: &str = "globalVision.points";

pub const INVEST_TITLE: &str = "invest.title";
pub const INVEST_POINTS: &str = "invest.points";
pub const INVEST_CTA: &str = "invest.cta";

pub const HOW_IT_WORKS_TITLE: &str = "howItWorks.title";
pub const HOW_IT_WORKS_SUBTITLE: &str = "howItWorks.subtitle";
pub const HOW_IT_WORKS_TABS: &str = "howItWorks.tabs";
pub const HOW_IT_WORKS_NOTE: &str = "howItWorks.note";

pub const WHO_IS_IT_FOR_TITLE: &str = "whoIsItFor.title";
pub const WHO_IS_IT_FOR_SUBTITLE: &str = "whoIsItFor.subtitle";
pub const WHO_IS_IT_FOR_AUDIENCES: &str = "whoIsItFor.audiences";
pub const WHO_IS_IT_FOR_NOTE: &str = "whoIsItFor.note";

pub const ECOSYSTEM_TITLE: &str = "ecosystem.title";
pub const ECOSYSTEM_SUBTITLE: &str = "ecosystem.subtitle";
pub const ECOSYSTEM_PILLARS_TITLE: &str = "ecosystem.corePillars.title";
pub const ECOSYSTEM_PILLARS: &str = "ecosystem.corePillars.pillars";
pub const ECOSYSTEM_VALUE_LOOP_TITLE: &str = "ecosystem.valueLoop.title";
pub const ECOSYSTEM_VALUE_LOOP_DESCRIPTION: &str = "ecosystem.valueLoop.description";
pub const ECOSYSTEM_NOTE: &str = "ecosystem.note";

pub const DYNAMIC_NFTS_TITLE: &str = "dynamicNfts.title";
pub const DYNAMIC_NFTS_DESCRIPTION: &str = "dynamicNfts.description";
pub const DYNAMIC_NFTS_NOTE: &str = "dynamicNfts.note";

pub const NEWS_TITLE: &str = "news.title";
pub const NEWS_ARTICLES: &str = "news.articles";
pub const NEWS_NOTE: &str = "news.note";

// ==================== Footer ====================
pub const FOOTER_EXPLORE_TITLE: &str = "footer.explore.title";
pub const FOOTER_EXPLORE_LINKS: &str = "footer.explore.links";
pub const FOOTER_SUPPORT_TITLE: &str = "footer.support.title";
pub const FOOTER_SUPPORT_LINKS: &str = "footer.support.links";
pub const FOOTER_COMMUNITY_TITLE: &str = "footer.community.title";
pub const FOOTER_COMMUNITY_LINKS: &str = "footer.community.links";
pub const FOOTER_LEGAL_TITLE: &str = "footer.legal.title";
pub const FOOTER_LEGAL_LINKS: &str = "footer.legal.links";
pub const FOOTER_COPYRIGHT: &str = "footer.copyright";

// ==================== Demo ====================
pub const DEMO_TITLE: &str = "demo.title";
pub const DEMO_MESSAGE: &str = "demo.message";

/// Every key path above.
pub const ALL: &[&str] = &[
    META_TITLE,
    META_DESCRIPTION,
    NAV_HOW_IT_WORKS,
    NAV_ECOSYSTEM,
    NAV_NEWS,
    NAV_LOGIN,
    NAV_INSTALL,
    NAV_LANGUAGE,
    HERO_HEADLINE,
    HERO_SUBHEADLINE,
    HERO_PRIMARY_CTA,
    HERO_SECONDARY_CTA_INSTALL,
    HERO_SECONDARY_CTA_LOGIN,
    WHAT_IS_TITLE,
    WHAT_IS_DESCRIPTION,
    GLOBAL_VISION_TITLE,
    GLOBAL_VISION_HEADLINE,
    GLOBAL_VISION_DESCRIPTION,
    GLOBAL_VISION_POINTS,
    INVEST_TITLE,
    INVEST_POINTS,
    INVEST_CTA,
    HOW_IT_WORKS_TITLE,
    HOW_IT_WORKS_SUBTITLE,
    HOW_IT_WORKS_TABS,
    HOW_IT_WORKS_NOTE,
    WHO_IS_IT_FOR_TITLE,
    WHO_IS_IT_FOR_SUBTITLE,
    WHO_IS_IT_FOR_AUDIENCES,
    WHO_IS_IT_FOR_NOTE,
    ECOSYSTEM_TITLE,
    ECOSYSTEM_SUBTITLE,
    ECOSYSTEM_PILLARS_TITLE,
    ECOSYSTEM_PILLARS,
    ECOSYSTEM_VALUE_LOOP_TITLE,
    ECOSYSTEM_VALUE_LOOP_DESCRIPTION,
    ECOSYSTEM_NOTE,
    DYNAMIC_NFTS_TITLE,
    DYNAMIC_NFTS_DESCRIPTION,
    DYNAMIC_NFTS_NOTE,
    NEWS_TITLE,
    NEWS_ARTICLES,
    NEWS_NOTE,
    FOOTER_EXPLORE_TITLE,
    FOOTER_EXPLORE_LINKS,
    FOOTER_SUPPORT_TITLE,
    FOOTER_SUPPORT_LINKS,
    FOOTER_COMMUNITY_TITLE,
    FOOTER_COMMUNITY_LINKS,
    FOOTER_LEGAL_TITLE,
    FOOTER_LEGAL_LINKS,
    FOOTER_COPYRIGHT,
    DEMO_TITLE,
    DEMO_MESSAGE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{ContentDictionary, KeyPath};

    #[test]
    fn test_all_keys_parse() {
        for key in ALL {
            assert!(KeyPath::parse(key).is_ok(), "{} should parse", key);
        }
    }

    #[test]
    fn test_all_keys_exist_in_default_dictionary() {
        let dictionary = ContentDictionary::embedded().unwrap();
        for key in ALL {
            let path = KeyPath::parse(key).unwrap();
            assert!(
                dictionary.lookup("en", &path).is_some(),
                "{} missing from en.json",
                key
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for key in ALL {
            assert!(seen.insert(*key), "duplicate key {}", key);
        }
    }
}
