//! # 婚恋模块 - 共享类型定义
//!
//! 定义性格测验、兼容性画像和测验报告的核心数据结构。
//!
//! 所有评分统一使用 `u8`，取值范围 0-100。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

// ============================================================================
// 基础标识
// ============================================================================

/// 题目 ID（从 1 开始）
pub type QuestionId = u16;

/// 选项索引（从 0 开始）
pub type OptionIndex = u8;

/// 报告 ID
pub type ReportId = u64;

/// 叙述文本最大字节数
pub const MAX_NARRATIVE_LEN: u32 = 256;

/// 叙述列表最大条目数
pub const MAX_NARRATIVE_ITEMS: u32 = 6;

/// 叙述文本（UTF-8 字节）
pub type NarrativeText = BoundedVec<u8, ConstU32<MAX_NARRATIVE_LEN>>;

/// 叙述列表
pub type NarrativeList = BoundedVec<NarrativeText, ConstU32<MAX_NARRATIVE_ITEMS>>;

// ============================================================================
// 兼容性等级
// ============================================================================

/// 兼容性颜色等级
///
/// 用于界面主题和匹配分组
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum CompatibilityColor {
    /// 绿色（65-100分）
    Green = 0,
    /// 黄色（40-64分）
    #[default]
    Yellow = 1,
    /// 红色（0-39分）
    Red = 2,
}

impl CompatibilityColor {
    /// 根据综合兼容指数获取颜色等级
    pub fn from_score(score: u8) -> Self {
        match score {
            65..=u8::MAX => Self::Green,
            40..=64 => Self::Yellow,
            _ => Self::Red,
        }
    }
}

// ============================================================================
// 依恋类型
// ============================================================================

/// 依恋类型
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum AttachmentStyle {
    /// 安全型（低焦虑、低回避）
    #[default]
    Secure = 0,
    /// 焦虑型（高焦虑、低回避）
    Anxious = 1,
    /// 回避型（低焦虑、高回避）
    Avoidant = 2,
    /// 恐惧型（高焦虑、高回避）
    Fearful = 3,
}

// ============================================================================
// MBTI 类型
// ============================================================================

/// MBTI 人格类型（16 种）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum MbtiType {
    #[default]
    Intj = 0,
    Intp = 1,
    Entj = 2,
    Entp = 3,
    Infj = 4,
    Infp = 5,
    Enfj = 6,
    Enfp = 7,
    Istj = 8,
    Isfj = 9,
    Estj = 10,
    Esfj = 11,
    Istp = 12,
    Isfp = 13,
    Estp = 14,
    Esfp = 15,
}

/// MBTI 气质分组
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum Temperament {
    /// 理性者（NT）
    Rational,
    /// 理想者（NF）
    Idealist,
    /// 守护者（SJ）
    Guardian,
    /// 工匠者（SP）
    Artisan,
}

impl MbtiType {
    /// 全部 16 种类型
    pub const ALL: [MbtiType; 16] = [
        Self::Intj, Self::Intp, Self::Entj, Self::Entp,
        Self::Infj, Self::Infp, Self::Enfj, Self::Enfp,
        Self::Istj, Self::Isfj, Self::Estj, Self::Esfj,
        Self::Istp, Self::Isfp, Self::Estp, Self::Esfp,
    ];

    /// 根据四个维度组合类型
    ///
    /// - `extravert`: E / I
    /// - `intuitive`: N / S
    /// - `feeling`: F / T
    /// - `judging`: J / P
    pub fn from_axes(extravert: bool, intuitive: bool, feeling: bool, judging: bool) -> Self {
        match (extravert, intuitive, feeling, judging) {
            (false, true, false, true) => Self::Intj,
            (false, true, false, false) => Self::Intp,
            (true, true, false, true) => Self::Entj,
            (true, true, false, false) => Self::Entp,
            (false, true, true, true) => Self::Infj,
            (false, true, true, false) => Self::Infp,
            (true, true, true, true) => Self::Enfj,
            (true, true, true, false) => Self::Enfp,
            (false, false, false, true) => Self::Istj,
            (false, false, true, true) => Self::Isfj,
            (true, false, false, true) => Self::Estj,
            (true, false, true, true) => Self::Esfj,
            (false, false, false, false) => Self::Istp,
            (false, false, true, false) => Self::Isfp,
            (true, false, false, false) => Self::Estp,
            (true, false, true, false) => Self::Esfp,
        }
    }

    /// 四字母代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
        }
    }

    /// 所属气质分组
    pub fn temperament(&self) -> Temperament {
        let code = self.code().as_bytes();
        match (code[1], code[2], code[3]) {
            (b'N', b'T', _) => Temperament::Rational,
            (b'N', b'F', _) => Temperament::Idealist,
            (b'S', _, b'J') => Temperament::Guardian,
            _ => Temperament::Artisan,
        }
    }
}

// ============================================================================
// 大五人格
// ============================================================================

/// 大五人格维度
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum BigFiveTrait {
    /// 开放性
    Openness,
    /// 尽责性
    Conscientiousness,
    /// 外向性
    Extraversion,
    /// 宜人性
    Agreeableness,
    /// 神经质
    Neuroticism,
}

/// 大五人格评分 (0-100)
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct BigFiveScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

// ============================================================================
// 情商
// ============================================================================

/// 情商子维度
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum EqFacet {
    /// 自我觉察
    SelfAwareness,
    /// 自我调节
    SelfRegulation,
    /// 内在动机
    Motivation,
    /// 共情
    Empathy,
    /// 社交技巧
    SocialSkills,
}

/// 情商评分 (0-100)
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct EqProfile {
    pub self_awareness: u8,
    pub self_regulation: u8,
    pub motivation: u8,
    pub empathy: u8,
    pub social_skills: u8,
}

impl EqProfile {
    /// 按固定顺序列出子维度评分
    pub fn facets(&self) -> [(EqFacet, u8); 5] {
        [
            (EqFacet::SelfAwareness, self.self_awareness),
            (EqFacet::SelfRegulation, self.self_regulation),
            (EqFacet::Motivation, self.motivation),
            (EqFacet::Empathy, self.empathy),
            (EqFacet::SocialSkills, self.social_skills),
        ]
    }

    /// 子维度平均分（四舍五入）
    pub fn mean(&self) -> u8 {
        let sum: u32 = self.facets().iter().map(|(_, s)| *s as u32).sum();
        ((sum + 2) / 5) as u8
    }
}

// ============================================================================
// 兼容性画像
// ============================================================================

/// 优势、挑战与成长方向
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct StrengthsWeaknesses {
    /// 优势
    pub strengths: NarrativeList,
    /// 挑战
    pub challenges: NarrativeList,
    /// 成长方向
    pub growth_areas: NarrativeList,
}

/// 兼容性画像
///
/// 由一份已完成的测验答案唯一推导，重新测验时整体覆盖。
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct CompatibilityProfile {
    /// 颜色等级
    pub overall_color: CompatibilityColor,
    /// 综合兼容指数 (0-100)，颜色等级由此得出
    pub compatibility_score: u8,
    /// 大五人格
    pub personality_traits: BigFiveScores,
    /// 依恋类型
    pub attachment_style: AttachmentStyle,
    /// MBTI 类型
    pub mbti_type: MbtiType,
    /// 情商
    pub emotional_intelligence: EqProfile,
    /// 优势与挑战
    pub strengths_weaknesses: StrengthsWeaknesses,
    /// 兼容性洞察
    pub compatibility_insights: NarrativeList,
    /// 相处建议
    pub relationship_tips: NarrativeList,
    /// 理想伴侣画像
    pub ideal_partner_summary: NarrativeText,
    /// 成长建议
    pub growth_recommendation: NarrativeText,
    /// 约会体验描述
    pub dating_experience: NarrativeText,
}

// ============================================================================
// 测验报告
// ============================================================================

/// 测验报告
///
/// 包装兼容性画像，附带付费解锁标记。
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct QuizReport<AccountId, BlockNumber> {
    /// 报告 ID
    pub id: ReportId,
    /// 所有者
    pub owner: AccountId,
    /// 测验轮次
    pub quiz_id: u32,
    /// 兼容性画像
    pub profile: CompatibilityProfile,
    /// 是否已付费解锁
    pub is_paid: bool,
    /// 颜色等级（画像中 overall_color 的冗余副本，便于筛选）
    pub compatibility_color: CompatibilityColor,
    /// 创建时间
    pub created_at: BlockNumber,
    /// 最后更新时间
    pub updated_at: BlockNumber,
}
