//! # 兼容性画像生成
//!
//! 汇总评分与叙述模板，由一份完整答案生成 `CompatibilityProfile`。
//!
//! 本模块不读写存储，不产生事件。

use crate::narrative;
use crate::scoring::{
    calculate_eq_profile, combine_compatibility_score, determine_attachment_style,
    mbti_from_traits, missing_required, score_big_five, validate_answers, Answers, ScoringError,
};
use pallet_matchmaking_common::{CompatibilityColor, CompatibilityProfile, StrengthsWeaknesses};
use sp_std::vec::Vec;

/// 生成兼容性画像
///
/// 答案必须覆盖全部必答题，否则返回 `IncompleteInput`。
pub fn build_profile(answers: &Answers) -> Result<CompatibilityProfile, ScoringError> {
    let missing = missing_required(answers);
    if missing > 0 {
        return Err(ScoringError::IncompleteInput { missing });
    }
    validate_answers(answers)?;

    let traits = score_big_five(answers)?;
    let attachment_style = determine_attachment_style(answers)?;
    let emotional_intelligence = calculate_eq_profile(answers)?;
    let mbti_type = mbti_from_traits(&traits);
    let compatibility_score =
        combine_compatibility_score(&traits, &emotional_intelligence, attachment_style);
    let overall_color = CompatibilityColor::from_score(compatibility_score);
    let temperament = mbti_type.temperament();

    let mut strengths: Vec<&'static str> = narrative::color_strengths(overall_color).to_vec();
    strengths.push(narrative::attachment_strength(attachment_style));

    let mut challenges: Vec<&'static str> =
        narrative::attachment_challenges(attachment_style).to_vec();
    challenges.push(narrative::color_challenge(overall_color));

    let growth_areas = narrative::weakest_facets(&emotional_intelligence)
        .into_iter()
        .map(narrative::growth_area);

    let mut insights: Vec<&'static str> = narrative::temperament_insights(temperament).to_vec();
    insights.push(narrative::attachment_insight(attachment_style));

    Ok(CompatibilityProfile {
        overall_color,
        compatibility_score,
        personality_traits: traits,
        attachment_style,
        mbti_type,
        emotional_intelligence,
        strengths_weaknesses: StrengthsWeaknesses {
            strengths: narrative::list(strengths),
            challenges: narrative::list(challenges),
            growth_areas: narrative::list(growth_areas),
        },
        compatibility_insights: narrative::list(insights),
        relationship_tips: narrative::list(
            narrative::relationship_tips(attachment_style).iter().copied(),
        ),
        ideal_partner_summary: narrative::text(narrative::ideal_partner(temperament)),
        growth_recommendation: narrative::text(narrative::growth_recommendation(overall_color)),
        dating_experience: narrative::text(narrative::dating_experience(attachment_style)),
    })
}
