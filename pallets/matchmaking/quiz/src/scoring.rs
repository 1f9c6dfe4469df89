//! # 评分算法
//!
//! 将答案映射为大五人格、依恋类型、MBTI、情商和兼容性颜色。
//!
//! 全部为整数运算，同样的输入总是得到同样的输出。
//!
//! ## 综合兼容指数
//!
//! | 维度 | 权重 |
//! |------|------|
//! | 情商均值 | 40% |
//! | 情绪稳定（100 - 神经质） | 30% |
//! | 宜人性 | 30% |
//!
//! 依恋类型修正：安全型 +10，焦虑型 / 回避型 -5，恐惧型 -15，结果截断到 0-100。

use crate::questions::{self, Facet};
use pallet_matchmaking_common::{
    AttachmentStyle, BigFiveScores, BigFiveTrait, CompatibilityColor, EqFacet, EqProfile, MbtiType,
    OptionIndex, QuestionId,
};
use sp_std::collections::btree_map::BTreeMap;

/// 维度无作答时的中性默认分
pub const NEUTRAL_SCORE: u8 = 50;

/// 依恋维度高分阈值（严格大于）
pub const ATTACHMENT_HIGH_THRESHOLD: u8 = 50;

/// MBTI 维度取前一字母的阈值（大于等于）
pub const MBTI_AXIS_THRESHOLD: u8 = 50;

/// 答案集合
pub type Answers = BTreeMap<QuestionId, OptionIndex>;

/// 评分错误
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoringError {
    /// 答案未覆盖全部必答题
    IncompleteInput { missing: u32 },
    /// 选项超出该题范围
    InvalidOption { question_id: QuestionId, option: OptionIndex },
    /// 题目不存在
    UnknownQuestion { question_id: QuestionId },
}

/// 校验答案：题目必须存在，选项必须在范围内
pub fn validate_answers(answers: &Answers) -> Result<(), ScoringError> {
    for (&question_id, &option) in answers.iter() {
        let question =
            questions::question(question_id).ok_or(ScoringError::UnknownQuestion { question_id })?;
        if !question.accepts(option) {
            return Err(ScoringError::InvalidOption { question_id, option });
        }
    }
    Ok(())
}

/// 缺失的必答题数量
pub fn missing_required(answers: &Answers) -> u32 {
    questions::required_ids()
        .filter(|id| !answers.contains_key(id))
        .count() as u32
}

/// 单维度得分：已作答题目分值的四舍五入均值，无作答时返回中性分
fn facet_score(facet: Facet, answers: &Answers) -> u8 {
    let (sum, count) = questions::questions_for(facet)
        .filter_map(|q| answers.get(&q.id).and_then(|option| q.points(*option)))
        .fold((0u32, 0u32), |(sum, count), points| (sum + points as u32, count + 1));

    if count == 0 {
        return NEUTRAL_SCORE;
    }
    ((sum + count / 2) / count) as u8
}

fn ensure_scorable(answers: &Answers) -> Result<(), ScoringError> {
    if answers.is_empty() {
        return Err(ScoringError::IncompleteInput { missing: missing_required(answers) });
    }
    validate_answers(answers)
}

/// 计算单个大五人格维度
pub fn score_trait(which: BigFiveTrait, answers: &Answers) -> Result<u8, ScoringError> {
    ensure_scorable(answers)?;
    Ok(facet_score(Facet::Trait(which), answers))
}

/// 计算大五人格全部维度
pub fn score_big_five(answers: &Answers) -> Result<BigFiveScores, ScoringError> {
    ensure_scorable(answers)?;
    Ok(BigFiveScores {
        openness: facet_score(Facet::Trait(BigFiveTrait::Openness), answers),
        conscientiousness: facet_score(Facet::Trait(BigFiveTrait::Conscientiousness), answers),
        extraversion: facet_score(Facet::Trait(BigFiveTrait::Extraversion), answers),
        agreeableness: facet_score(Facet::Trait(BigFiveTrait::Agreeableness), answers),
        neuroticism: facet_score(Facet::Trait(BigFiveTrait::Neuroticism), answers),
    })
}

/// 判定依恋类型
///
/// | 焦虑 | 回避 | 类型 |
/// |------|------|------|
/// | 低 | 低 | 安全型 |
/// | 高 | 低 | 焦虑型 |
/// | 低 | 高 | 回避型 |
/// | 高 | 高 | 恐惧型 |
pub fn determine_attachment_style(answers: &Answers) -> Result<AttachmentStyle, ScoringError> {
    ensure_scorable(answers)?;
    let anxious = facet_score(Facet::AttachmentAnxiety, answers) > ATTACHMENT_HIGH_THRESHOLD;
    let avoidant = facet_score(Facet::AttachmentAvoidance, answers) > ATTACHMENT_HIGH_THRESHOLD;

    Ok(match (anxious, avoidant) {
        (false, false) => AttachmentStyle::Secure,
        (true, false) => AttachmentStyle::Anxious,
        (false, true) => AttachmentStyle::Avoidant,
        (true, true) => AttachmentStyle::Fearful,
    })
}

/// 由大五人格推导 MBTI
///
/// E/I 取外向性，N/S 取开放性，F/T 取宜人性，J/P 取尽责性。
pub fn mbti_from_traits(traits: &BigFiveScores) -> MbtiType {
    MbtiType::from_axes(
        traits.extraversion >= MBTI_AXIS_THRESHOLD,
        traits.openness >= MBTI_AXIS_THRESHOLD,
        traits.agreeableness >= MBTI_AXIS_THRESHOLD,
        traits.conscientiousness >= MBTI_AXIS_THRESHOLD,
    )
}

/// 判定 MBTI 类型
pub fn determine_mbti_type(answers: &Answers) -> Result<MbtiType, ScoringError> {
    let traits = score_big_five(answers)?;
    Ok(mbti_from_traits(&traits))
}

/// 计算情商五个子维度
pub fn calculate_eq_profile(answers: &Answers) -> Result<EqProfile, ScoringError> {
    ensure_scorable(answers)?;
    Ok(EqProfile {
        self_awareness: facet_score(Facet::Emotion(EqFacet::SelfAwareness), answers),
        self_regulation: facet_score(Facet::Emotion(EqFacet::SelfRegulation), answers),
        motivation: facet_score(Facet::Emotion(EqFacet::Motivation), answers),
        empathy: facet_score(Facet::Emotion(EqFacet::Empathy), answers),
        social_skills: facet_score(Facet::Emotion(EqFacet::SocialSkills), answers),
    })
}

/// 依恋类型修正值
fn attachment_adjustment(style: AttachmentStyle) -> i16 {
    match style {
        AttachmentStyle::Secure => 10,
        AttachmentStyle::Anxious => -5,
        AttachmentStyle::Avoidant => -5,
        AttachmentStyle::Fearful => -15,
    }
}

/// 由各项评分合成综合兼容指数
pub fn combine_compatibility_score(
    traits: &BigFiveScores,
    eq: &EqProfile,
    style: AttachmentStyle,
) -> u8 {
    let weighted = eq.mean() as u32 * 40
        + (100 - traits.neuroticism.min(100)) as u32 * 30
        + traits.agreeableness.min(100) as u32 * 30;
    let base = (weighted / 100) as i16;
    (base + attachment_adjustment(style)).clamp(0, 100) as u8
}

/// 计算综合兼容指数 (0-100)
pub fn calculate_compatibility_score(answers: &Answers) -> Result<u8, ScoringError> {
    let traits = score_big_five(answers)?;
    let eq = calculate_eq_profile(answers)?;
    let style = determine_attachment_style(answers)?;
    Ok(combine_compatibility_score(&traits, &eq, style))
}

/// 判定兼容性颜色等级
pub fn determine_compatibility_color(answers: &Answers) -> Result<CompatibilityColor, ScoringError> {
    calculate_compatibility_score(answers).map(CompatibilityColor::from_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QUESTIONS;

    /// 全部作答同一选项（超出量表的按最大选项）
    fn uniform(option: OptionIndex) -> Answers {
        QUESTIONS
            .iter()
            .map(|q| (q.id, option.min(q.scale.option_count() - 1)))
            .collect()
    }

    fn with(mut answers: Answers, overrides: &[(QuestionId, OptionIndex)]) -> Answers {
        for (id, option) in overrides {
            answers.insert(*id, *option);
        }
        answers
    }

    #[test]
    fn lowest_options_score_low_traits() {
        let answers = uniform(0);
        // 正向 0 + 反向 100 + 正向 0，均值 33
        assert_eq!(score_trait(BigFiveTrait::Openness, &answers), Ok(33));
        let traits = score_big_five(&answers).unwrap();
        assert_eq!(traits.neuroticism, 33);
        assert_eq!(determine_attachment_style(&answers), Ok(AttachmentStyle::Secure));
        assert_eq!(determine_mbti_type(&answers), Ok(MbtiType::Istp));
        assert_eq!(calculate_eq_profile(&answers).unwrap(), EqProfile::default());
        // (0 * 40 + 67 * 30 + 33 * 30) / 100 + 10 = 40
        assert_eq!(calculate_compatibility_score(&answers), Ok(40));
        assert_eq!(determine_compatibility_color(&answers), Ok(CompatibilityColor::Yellow));
    }

    #[test]
    fn highest_options_score_green() {
        let answers = uniform(4);
        assert_eq!(score_trait(BigFiveTrait::Extraversion, &answers), Ok(67));
        assert_eq!(determine_mbti_type(&answers), Ok(MbtiType::Enfj));
        assert_eq!(calculate_eq_profile(&answers).unwrap().mean(), 100);
        // (100 * 40 + 33 * 30 + 67 * 30) / 100 + 10 = 80
        assert_eq!(calculate_compatibility_score(&answers), Ok(80));
        assert_eq!(determine_compatibility_color(&answers), Ok(CompatibilityColor::Green));
    }

    #[test]
    fn attachment_quadrants() {
        let base = uniform(0);
        let anxious = with(base.clone(), &[(16, 3), (18, 0)]);
        assert_eq!(determine_attachment_style(&anxious), Ok(AttachmentStyle::Anxious));

        let avoidant = with(base.clone(), &[(17, 3), (19, 0)]);
        assert_eq!(determine_attachment_style(&avoidant), Ok(AttachmentStyle::Avoidant));

        let fearful = with(base, &[(16, 3), (18, 0), (17, 3), (19, 0)]);
        assert_eq!(determine_attachment_style(&fearful), Ok(AttachmentStyle::Fearful));
    }

    #[test]
    fn distressed_profile_scores_red() {
        let answers = with(
            uniform(0),
            &[
                // 神经质 100
                (5, 4), (10, 0), (15, 3),
                // 宜人性 0
                (4, 0), (9, 4), (14, 0),
                // 恐惧型依恋
                (16, 3), (18, 0), (17, 3), (19, 0),
            ],
        );
        assert_eq!(score_trait(BigFiveTrait::Neuroticism, &answers), Ok(100));
        assert_eq!(score_trait(BigFiveTrait::Agreeableness, &answers), Ok(0));
        assert_eq!(calculate_compatibility_score(&answers), Ok(0));
        assert_eq!(determine_compatibility_color(&answers), Ok(CompatibilityColor::Red));
    }

    #[test]
    fn unanswered_facet_falls_back_to_neutral() {
        let answers: Answers = [(20u16, 4u8)].into_iter().collect();
        assert_eq!(score_trait(BigFiveTrait::Openness, &answers), Ok(NEUTRAL_SCORE));
        assert_eq!(calculate_eq_profile(&answers).unwrap().self_awareness, 100);
        assert_eq!(calculate_eq_profile(&answers).unwrap().empathy, NEUTRAL_SCORE);
    }

    #[test]
    fn empty_answers_are_rejected() {
        let answers = Answers::new();
        let expected = ScoringError::IncompleteInput { missing: QUESTIONS.len() as u32 };
        assert_eq!(score_trait(BigFiveTrait::Openness, &answers), Err(expected));
        assert_eq!(determine_attachment_style(&answers), Err(expected));
        assert_eq!(determine_mbti_type(&answers), Err(expected));
        assert_eq!(calculate_eq_profile(&answers), Err(expected));
        assert_eq!(determine_compatibility_color(&answers), Err(expected));
    }

    #[test]
    fn out_of_range_option_is_a_validation_error() {
        let answers = with(uniform(0), &[(16, 4)]);
        assert_eq!(
            score_trait(BigFiveTrait::Openness, &answers),
            Err(ScoringError::InvalidOption { question_id: 16, option: 4 })
        );
    }

    #[test]
    fn unknown_question_is_a_validation_error() {
        let answers = with(uniform(0), &[(99, 0)]);
        assert_eq!(
            validate_answers(&answers),
            Err(ScoringError::UnknownQuestion { question_id: 99 })
        );
    }

    #[test]
    fn compatibility_score_is_clamped() {
        let traits = BigFiveScores { agreeableness: 100, neuroticism: 0, ..Default::default() };
        let eq = EqProfile {
            self_awareness: 100,
            self_regulation: 100,
            motivation: 100,
            empathy: 100,
            social_skills: 100,
        };
        assert_eq!(combine_compatibility_score(&traits, &eq, AttachmentStyle::Secure), 100);
        assert_eq!(
            combine_compatibility_score(&BigFiveScores { neuroticism: 100, ..Default::default() }, &EqProfile::default(), AttachmentStyle::Fearful),
            0
        );
    }

    #[test]
    fn missing_required_counts_gaps() {
        let mut answers = uniform(1);
        assert_eq!(missing_required(&answers), 0);
        answers.remove(&3);
        answers.remove(&24);
        assert_eq!(missing_required(&answers), 2);
    }
}
