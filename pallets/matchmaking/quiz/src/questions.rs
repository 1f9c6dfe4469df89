//! # 题库
//!
//! 固定题库：每道题只加载到一个维度，带正向或反向计分方向。
//!
//! 选项分值通过固定查找表换算到 0-100：
//!
//! | 选项数 | 分值 |
//! |--------|------|
//! | 4 | 0 / 33 / 67 / 100 |
//! | 5 | 0 / 25 / 50 / 75 / 100 |
//!
//! 反向计分题取 `100 - 分值`。
//!
//! 权重为占位模型，真实心理测量权重属于产品决策。

use pallet_matchmaking_common::{BigFiveTrait, EqFacet, OptionIndex, QuestionId};

/// 四级量表分值
pub const LIKERT_4: [u8; 4] = [0, 33, 67, 100];

/// 五级量表分值
pub const LIKERT_5: [u8; 5] = [0, 25, 50, 75, 100];

/// 测量维度
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Facet {
    /// 大五人格
    Trait(BigFiveTrait),
    /// 依恋焦虑
    AttachmentAnxiety,
    /// 依恋回避
    AttachmentAvoidance,
    /// 情商子维度
    Emotion(EqFacet),
}

/// 计分方向
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Keying {
    Forward,
    Reverse,
}

/// 量表类型
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scale {
    Four,
    Five,
}

impl Scale {
    /// 选项数
    pub const fn option_count(&self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    fn table(&self) -> &'static [u8] {
        match self {
            Self::Four => &LIKERT_4,
            Self::Five => &LIKERT_5,
        }
    }
}

/// 题目
#[derive(Clone, Copy, Debug)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub scale: Scale,
    pub facet: Facet,
    pub keying: Keying,
}

impl Question {
    /// 选项是否有效
    pub fn accepts(&self, option: OptionIndex) -> bool {
        option < self.scale.option_count()
    }

    /// 选项换算后的分值，选项越界时返回 None
    pub fn points(&self, option: OptionIndex) -> Option<u8> {
        let raw = *self.scale.table().get(option as usize)?;
        Some(match self.keying {
            Keying::Forward => raw,
            Keying::Reverse => 100 - raw,
        })
    }
}

use BigFiveTrait::*;
use Facet::*;
use Keying::*;
use Scale::*;

const fn q(id: QuestionId, prompt: &'static str, scale: Scale, facet: Facet, keying: Keying) -> Question {
    Question { id, prompt, scale, facet, keying }
}

/// 必答题数量
pub const REQUIRED_QUESTIONS: usize = 24;

/// 题库
pub const QUESTIONS: [Question; REQUIRED_QUESTIONS] = [
    q(1, "I enjoy trying new restaurants, places and ideas on a date.", Five, Trait(Openness), Forward),
    q(2, "I plan dates and show up on time.", Five, Trait(Conscientiousness), Forward),
    q(3, "Meeting new people energizes me.", Five, Trait(Extraversion), Forward),
    q(4, "I give a partner the benefit of the doubt.", Five, Trait(Agreeableness), Forward),
    q(5, "I worry about where a relationship is heading.", Five, Trait(Neuroticism), Forward),
    q(6, "I prefer familiar routines over surprises.", Five, Trait(Openness), Reverse),
    q(7, "I often leave things to the last minute.", Five, Trait(Conscientiousness), Reverse),
    q(8, "I need a lot of quiet time after socializing.", Five, Trait(Extraversion), Reverse),
    q(9, "I tend to win arguments rather than settle them.", Five, Trait(Agreeableness), Reverse),
    q(10, "I stay calm when plans fall through.", Five, Trait(Neuroticism), Reverse),
    q(11, "How often do you seek out art, music or books with a partner?", Four, Trait(Openness), Forward),
    q(12, "How reliably do you follow through on promises?", Four, Trait(Conscientiousness), Forward),
    q(13, "How often do you start conversations with strangers?", Four, Trait(Extraversion), Forward),
    q(14, "How often do you put a partner's needs before your own?", Four, Trait(Agreeableness), Forward),
    q(15, "How often do small conflicts keep you up at night?", Four, Trait(Neuroticism), Forward),
    q(16, "How often do you fear a partner will lose interest?", Four, AttachmentAnxiety, Forward),
    q(17, "How uncomfortable are you when a partner wants more closeness?", Four, AttachmentAvoidance, Forward),
    q(18, "How secure do you feel when a partner does not reply for a day?", Four, AttachmentAnxiety, Reverse),
    q(19, "How easily do you share your feelings with a partner?", Four, AttachmentAvoidance, Reverse),
    q(20, "I can name what I am feeling while I am feeling it.", Five, Emotion(EqFacet::SelfAwareness), Forward),
    q(21, "I can pause before reacting when I am upset.", Five, Emotion(EqFacet::SelfRegulation), Forward),
    q(22, "I keep working on goals even without outside praise.", Five, Emotion(EqFacet::Motivation), Forward),
    q(23, "I can sense how a partner feels before they say it.", Five, Emotion(EqFacet::Empathy), Forward),
    q(24, "I can ease tension in a group conversation.", Five, Emotion(EqFacet::SocialSkills), Forward),
];

/// 按 ID 查找题目
pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// 加载到指定维度的题目
pub fn questions_for(facet: Facet) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.facet == facet)
}

/// 全部必答题 ID
pub fn required_ids() -> impl Iterator<Item = QuestionId> {
    QUESTIONS.iter().map(|q| q.id)
}
