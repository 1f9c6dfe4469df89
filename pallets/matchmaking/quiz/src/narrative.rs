//! # 叙述模板
//!
//! 报告中的文字内容全部来自固定模板表，按颜色等级、依恋类型和 MBTI 气质分组选取。

use pallet_matchmaking_common::{
    AttachmentStyle, CompatibilityColor, EqFacet, EqProfile, NarrativeList, NarrativeText,
    Temperament,
};
use sp_std::vec::Vec;

/// 颜色等级对应的优势
pub fn color_strengths(color: CompatibilityColor) -> &'static [&'static str] {
    match color {
        CompatibilityColor::Green => &[
            "You communicate your needs openly and calmly.",
            "You bring stability and warmth to a partnership.",
        ],
        CompatibilityColor::Yellow => &[
            "You are willing to work on yourself and on your relationships.",
            "You notice early when something feels off between you and a partner.",
        ],
        CompatibilityColor::Red => &[
            "You know what you do not want, which is a real starting point.",
            "You feel deeply and care intensely about connection.",
        ],
    }
}

/// 依恋类型对应的优势
pub fn attachment_strength(style: AttachmentStyle) -> &'static str {
    match style {
        AttachmentStyle::Secure => "You trust easily without losing yourself.",
        AttachmentStyle::Anxious => "You are attentive and highly attuned to a partner's moods.",
        AttachmentStyle::Avoidant => "You are self-reliant and respect a partner's independence.",
        AttachmentStyle::Fearful => "You are perceptive about emotional undercurrents.",
    }
}

/// 依恋类型对应的挑战
pub fn attachment_challenges(style: AttachmentStyle) -> &'static [&'static str] {
    match style {
        AttachmentStyle::Secure => &[
            "You may assume others feel as settled as you do.",
            "You can overlook a partner's quiet need for extra reassurance.",
        ],
        AttachmentStyle::Anxious => &[
            "Silence from a partner can feel like rejection.",
            "You may seek reassurance more often than a partner expects.",
        ],
        AttachmentStyle::Avoidant => &[
            "Closeness can feel like pressure rather than comfort.",
            "You may withdraw when a conversation turns emotional.",
        ],
        AttachmentStyle::Fearful => &[
            "You want closeness but brace for disappointment.",
            "Mixed signals can make partners unsure where they stand.",
        ],
    }
}

/// 颜色等级对应的挑战
pub fn color_challenge(color: CompatibilityColor) -> &'static str {
    match color {
        CompatibilityColor::Green => "Comfort can turn into routine if you stop making an effort.",
        CompatibilityColor::Yellow => "Stress tends to show up in how you react to small conflicts.",
        CompatibilityColor::Red => "Old patterns may repeat unless you slow down and reflect.",
    }
}

/// 情商子维度对应的成长方向
pub fn growth_area(facet: EqFacet) -> &'static str {
    match facet {
        EqFacet::SelfAwareness => "Name your feelings before you act on them.",
        EqFacet::SelfRegulation => "Build a pause between a trigger and your response.",
        EqFacet::Motivation => "Set relationship goals that matter to you, not only to others.",
        EqFacet::Empathy => "Ask how a partner feels before offering solutions.",
        EqFacet::SocialSkills => "Practice repairing small misunderstandings quickly.",
    }
}

/// 气质分组对应的兼容性洞察
pub fn temperament_insights(temperament: Temperament) -> &'static [&'static str] {
    match temperament {
        Temperament::Rational => &[
            "You connect best through ideas, debate and shared projects.",
            "Partners who respect your need for independence bring out your warmth.",
        ],
        Temperament::Idealist => &[
            "You look for meaning and growth in a relationship.",
            "Partners who share their inner world earn your deepest loyalty.",
        ],
        Temperament::Guardian => &[
            "You value commitment, tradition and dependable routines.",
            "Partners who keep their word make you feel truly safe.",
        ],
        Temperament::Artisan => &[
            "You bond through shared experiences and spontaneity.",
            "Partners who keep life playful hold your attention.",
        ],
    }
}

/// 依恋类型对应的兼容性洞察
pub fn attachment_insight(style: AttachmentStyle) -> &'static str {
    match style {
        AttachmentStyle::Secure => "You pair well with most styles and can help an anxious partner settle.",
        AttachmentStyle::Anxious => "A secure, consistent partner helps you relax into the relationship.",
        AttachmentStyle::Avoidant => "A patient partner who gives you space lets trust grow at your pace.",
        AttachmentStyle::Fearful => "Steady, predictable affection matters more to you than grand gestures.",
    }
}

/// 依恋类型对应的相处建议
pub fn relationship_tips(style: AttachmentStyle) -> &'static [&'static str] {
    match style {
        AttachmentStyle::Secure => &[
            "Keep checking in, even when things feel easy.",
            "Share your reasoning so a partner learns from your calm.",
            "Make room for a partner's different pace of trust.",
        ],
        AttachmentStyle::Anxious => &[
            "Tell a partner what reassurance looks like for you.",
            "Pause before reading meaning into a delayed reply.",
            "Keep friendships and interests that are yours alone.",
        ],
        AttachmentStyle::Avoidant => &[
            "Say when you need space instead of going quiet.",
            "Share one small feeling each day.",
            "Notice when independence turns into distance.",
        ],
        AttachmentStyle::Fearful => &[
            "Move at a pace that feels safe and say so out loud.",
            "Choose partners whose actions match their words.",
            "Consider working with a counselor on old hurts.",
        ],
    }
}

/// 气质分组对应的理想伴侣画像
pub fn ideal_partner(temperament: Temperament) -> &'static str {
    match temperament {
        Temperament::Rational => "Someone curious and direct who enjoys big questions and gives you room to think.",
        Temperament::Idealist => "Someone emotionally open who shares your values and wants to grow together.",
        Temperament::Guardian => "Someone reliable and considerate who shows love through consistent action.",
        Temperament::Artisan => "Someone adventurous and easygoing who says yes to new experiences.",
    }
}

/// 颜色等级对应的成长建议
pub fn growth_recommendation(color: CompatibilityColor) -> &'static str {
    match color {
        CompatibilityColor::Green => "Keep investing in the habits that already work and stay curious about your partner.",
        CompatibilityColor::Yellow => "Focus on one growth area at a time; small consistent changes will shift your dating life.",
        CompatibilityColor::Red => "Take time to understand your patterns before your next relationship; support helps.",
    }
}

/// 依恋类型对应的约会体验描述
pub fn dating_experience(style: AttachmentStyle) -> &'static str {
    match style {
        AttachmentStyle::Secure => "Dating tends to feel steady for you; you enjoy getting to know people without rushing.",
        AttachmentStyle::Anxious => "Dating can feel intense for you; early chemistry matters and uncertainty is hard.",
        AttachmentStyle::Avoidant => "Dating often feels easiest at a distance; you open up once trust is proven.",
        AttachmentStyle::Fearful => "Dating can feel like a push and pull between wanting closeness and fearing it.",
    }
}

/// 情商最弱的两个子维度（分数相同按固定顺序）
pub fn weakest_facets(eq: &EqProfile) -> [EqFacet; 2] {
    let mut facets = eq.facets();
    facets.sort_unstable_by_key(|(facet, score)| (*score, *facet as u8));
    [facets[0].0, facets[1].0]
}

/// 模板文本转为有界字节串
pub fn text(template: &'static str) -> NarrativeText {
    NarrativeText::truncate_from(template.as_bytes().to_vec())
}

/// 模板列表转为有界列表
pub fn list<I: IntoIterator<Item = &'static str>>(templates: I) -> NarrativeList {
    let items: Vec<NarrativeText> = templates.into_iter().map(text).collect();
    NarrativeList::truncate_from(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pallet_matchmaking_common::{MAX_NARRATIVE_ITEMS, MAX_NARRATIVE_LEN};

    const COLORS: [CompatibilityColor; 3] =
        [CompatibilityColor::Green, CompatibilityColor::Yellow, CompatibilityColor::Red];
    const STYLES: [AttachmentStyle; 4] = [
        AttachmentStyle::Secure,
        AttachmentStyle::Anxious,
        AttachmentStyle::Avoidant,
        AttachmentStyle::Fearful,
    ];
    const TEMPERAMENTS: [Temperament; 4] = [
        Temperament::Rational,
        Temperament::Idealist,
        Temperament::Guardian,
        Temperament::Artisan,
    ];
    const FACETS: [EqFacet; 5] = [
        EqFacet::SelfAwareness,
        EqFacet::SelfRegulation,
        EqFacet::Motivation,
        EqFacet::Empathy,
        EqFacet::SocialSkills,
    ];

    fn all_templates() -> Vec<&'static str> {
        let mut all = Vec::new();
        for color in COLORS {
            all.extend_from_slice(color_strengths(color));
            all.push(color_challenge(color));
            all.push(growth_recommendation(color));
        }
        for style in STYLES {
            all.push(attachment_strength(style));
            all.extend_from_slice(attachment_challenges(style));
            all.push(attachment_insight(style));
            all.extend_from_slice(relationship_tips(style));
            all.push(dating_experience(style));
        }
        for temperament in TEMPERAMENTS {
            all.extend_from_slice(temperament_insights(temperament));
            all.push(ideal_partner(temperament));
        }
        for facet in FACETS {
            all.push(growth_area(facet));
        }
        all
    }

    #[test]
    fn every_template_fits_without_truncation() {
        for template in all_templates() {
            assert!(!template.is_empty());
            assert!(template.len() <= MAX_NARRATIVE_LEN as usize, "too long: {}", template);
            assert_eq!(text(template).into_inner(), template.as_bytes().to_vec());
        }
    }

    #[test]
    fn list_sizes_fit_the_bound() {
        for color in COLORS {
            assert!(color_strengths(color).len() + 1 <= MAX_NARRATIVE_ITEMS as usize);
        }
        for style in STYLES {
            assert!(attachment_challenges(style).len() + 1 <= MAX_NARRATIVE_ITEMS as usize);
            assert!(relationship_tips(style).len() <= MAX_NARRATIVE_ITEMS as usize);
        }
        for temperament in TEMPERAMENTS {
            assert!(temperament_insights(temperament).len() + 1 <= MAX_NARRATIVE_ITEMS as usize);
        }
    }

    #[test]
    fn weakest_facets_prefer_lowest_then_declared_order() {
        let eq = EqProfile {
            self_awareness: 80,
            self_regulation: 20,
            motivation: 60,
            empathy: 20,
            social_skills: 90,
        };
        assert_eq!(weakest_facets(&eq), [EqFacet::SelfRegulation, EqFacet::Empathy]);

        let flat = EqProfile::default();
        assert_eq!(weakest_facets(&flat), [EqFacet::SelfAwareness, EqFacet::SelfRegulation]);
    }
}
