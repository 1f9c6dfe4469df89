//! # 婚恋模块 - 性格测验
//!
//! 本模块提供性格测验的答题存储，以及由答案生成兼容性画像的算法。
//!
//! ## 功能概述
//!
//! - **答题**：逐题或批量提交答案，选项在提交时校验
//! - **完成测验**：最后一道必答题提交后自动生成兼容性画像并写入报告存储
//! - **重新测验**：清空答案，下次完成时覆盖原报告
//!
//! ## 画像内容
//!
//! | 维度 | 说明 |
//! |------|------|
//! | 大五人格 | 开放性、尽责性、外向性、宜人性、神经质 (0-100) |
//! | 依恋类型 | 安全型 / 焦虑型 / 回避型 / 恐惧型 |
//! | MBTI | 16 种类型 |
//! | 情商 | 自我觉察、自我调节、内在动机、共情、社交技巧 (0-100) |
//! | 颜色等级 | 绿 / 黄 / 红 |
//!
//! ## 使用流程
//!
//! 1. 用户提交答案（`submit_answer` / `submit_answers`）
//! 2. 全部必答题作答后测验自动完成，报告写入 `Config::ReportStore`
//! 3. 用户可通过 `retake_quiz` 重新测验

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod engine;
pub mod migrations;
pub mod narrative;
pub mod questions;
pub mod scoring;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use frame_support::pallet_prelude::*;
use frame_support::{CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use frame_system::pallet_prelude::*;
use sp_runtime::traits::Saturating;
use sp_std::collections::btree_map::BTreeMap;

use pallet_matchmaking_common::{
    CompatibilityColor, CompatibilityProfile, OptionIndex, QuestionId, QuizAnswerStore,
    QuizAuthProvider, QuizReportStore, ReportId,
};
use scoring::ScoringError;

pub(crate) const LOG_TARGET: &str = "runtime::matchmaking-quiz";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    /// 当前存储版本
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Pallet 配置
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 运行时事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 单个用户最多保存的答案数（不得少于必答题数量）
        #[pallet::constant]
        type MaxAnswers: Get<u32>;

        /// 报告存储
        type ReportStore: QuizReportStore<Self::AccountId, BlockNumberFor<Self>>;

        /// 身份验证提供者
        type AuthProvider: QuizAuthProvider<Self::AccountId>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    // ========================================================================
    // 类型定义
    // ========================================================================

    /// 用户答题记录
    #[derive(
        CloneNoBound, PartialEqNoBound, EqNoBound, RuntimeDebugNoBound, Encode, Decode, TypeInfo, MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    pub struct QuizAnswer<T: Config> {
        /// 题目 ID -> 选项索引
        pub answers: BoundedBTreeMap<QuestionId, OptionIndex, T::MaxAnswers>,
        /// 是否已完成
        pub completed: bool,
        /// 测验轮次（每次重新测验加 1）
        pub attempt: u32,
        /// 本轮开始时间
        pub started_at: BlockNumberFor<T>,
        /// 最后更新时间
        pub updated_at: BlockNumberFor<T>,
        /// 完成时间
        pub completed_at: Option<BlockNumberFor<T>>,
    }

    impl<T: Config> QuizAnswer<T> {
        /// 新建空白答题记录
        pub fn new(now: BlockNumberFor<T>) -> Self {
            Self {
                answers: BoundedBTreeMap::new(),
                completed: false,
                attempt: 0,
                started_at: now,
                updated_at: now,
                completed_at: None,
            }
        }

        /// 已作答题数
        pub fn answered(&self) -> u32 {
            self.answers.len() as u32
        }
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 答题记录存储
    #[pallet::storage]
    pub type QuizAnswers<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        QuizAnswer<T>,
    >;

    /// 已完成测验总次数
    #[pallet::storage]
    pub type CompletedCount<T: Config> = StorageValue<_, u64, ValueQuery>;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 答案已记录
        AnswerRecorded {
            who: T::AccountId,
            question_id: QuestionId,
            option: OptionIndex,
        },
        /// 测验已完成，报告已生成
        QuizCompleted {
            who: T::AccountId,
            attempt: u32,
            report_id: ReportId,
            color: CompatibilityColor,
            score: u8,
        },
        /// 测验已重置
        QuizReset {
            who: T::AccountId,
            attempt: u32,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 账户未通过身份验证
        NotAuthenticated,
        /// 题目不存在
        UnknownQuestion,
        /// 选项超出范围
        InvalidOption,
        /// 答案未覆盖全部必答题
        IncompleteQuiz,
        /// 测验记录不存在
        QuizNotFound,
        /// 测验已完成，需先重新测验
        QuizAlreadyCompleted,
        /// 答案数超出上限
        TooManyAnswers,
        /// 提交内容为空
        EmptySubmission,
    }

    impl<T> From<ScoringError> for Error<T> {
        fn from(error: ScoringError) -> Self {
            match error {
                ScoringError::IncompleteInput { .. } => Error::<T>::IncompleteQuiz,
                ScoringError::InvalidOption { .. } => Error::<T>::InvalidOption,
                ScoringError::UnknownQuestion { .. } => Error::<T>::UnknownQuestion,
            }
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                T::MaxAnswers::get() as usize >= questions::REQUIRED_QUESTIONS,
                "MaxAnswers must hold every required question"
            );
        }
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 提交单题答案
        ///
        /// 覆盖同一题的旧答案。最后一道必答题提交后测验自动完成。
        ///
        /// # 参数
        /// - `question_id`: 题目 ID
        /// - `option`: 选项索引
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::submit_answer())]
        pub fn submit_answer(
            origin: OriginFor<T>,
            question_id: QuestionId,
            option: OptionIndex,
        ) -> DispatchResult {
            let who = Self::ensure_authenticated(origin)?;
            Self::record_answers(&who, &[(question_id, option)])
        }

        /// 批量提交答案
        ///
        /// 全部答案校验通过后才会写入。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::submit_answers(answers.len() as u32))]
        pub fn submit_answers(
            origin: OriginFor<T>,
            answers: BoundedVec<(QuestionId, OptionIndex), T::MaxAnswers>,
        ) -> DispatchResult {
            let who = Self::ensure_authenticated(origin)?;
            ensure!(!answers.is_empty(), Error::<T>::EmptySubmission);
            Self::record_answers(&who, &answers)
        }

        /// 重新测验
        ///
        /// 清空答案并开始新一轮，原报告在下次完成时被覆盖。
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::retake_quiz())]
        pub fn retake_quiz(origin: OriginFor<T>) -> DispatchResult {
            let who = Self::ensure_authenticated(origin)?;
            let now = frame_system::Pallet::<T>::block_number();

            let attempt = QuizAnswers::<T>::try_mutate(&who, |maybe_quiz| -> Result<u32, DispatchError> {
                let quiz = maybe_quiz.as_mut().ok_or(Error::<T>::QuizNotFound)?;
                quiz.answers = BoundedBTreeMap::new();
                quiz.completed = false;
                quiz.completed_at = None;
                quiz.attempt = quiz.attempt.saturating_add(1);
                quiz.started_at = now;
                quiz.updated_at = now;
                Ok(quiz.attempt)
            })?;

            log::debug!(target: LOG_TARGET, "quiz reset for retake, attempt {}", attempt);

            Self::deposit_event(Event::QuizReset { who, attempt });

            Ok(())
        }
    }

    // ========================================================================
    // 内部函数
    // ========================================================================

    impl<T: Config> Pallet<T> {
        /// 校验签名来源与会话
        fn ensure_authenticated(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
            let who = ensure_signed(origin)?;
            ensure!(T::AuthProvider::is_authenticated(&who), Error::<T>::NotAuthenticated);
            Ok(who)
        }

        /// 校验单个答案
        fn validate_entry(question_id: QuestionId, option: OptionIndex) -> DispatchResult {
            let question = questions::question(question_id).ok_or(Error::<T>::UnknownQuestion)?;
            ensure!(question.accepts(option), Error::<T>::InvalidOption);
            Ok(())
        }

        /// 写入答案，必要时完成测验
        pub(crate) fn record_answers(
            who: &T::AccountId,
            entries: &[(QuestionId, OptionIndex)],
        ) -> DispatchResult {
            for (question_id, option) in entries.iter() {
                Self::validate_entry(*question_id, *option)?;
            }

            let now = frame_system::Pallet::<T>::block_number();
            let mut quiz = QuizAnswers::<T>::get(who).unwrap_or_else(|| QuizAnswer::new(now));
            ensure!(!quiz.completed, Error::<T>::QuizAlreadyCompleted);

            for &(question_id, option) in entries.iter() {
                quiz.answers
                    .try_insert(question_id, option)
                    .map_err(|_| Error::<T>::TooManyAnswers)?;

                Self::deposit_event(Event::AnswerRecorded {
                    who: who.clone(),
                    question_id,
                    option,
                });
            }
            quiz.updated_at = now;

            if scoring::missing_required(&quiz.answers) == 0 {
                Self::complete(who, &mut quiz, now)?;
            }

            QuizAnswers::<T>::insert(who, quiz);

            Ok(())
        }

        /// 生成画像并写入报告存储
        fn complete(
            who: &T::AccountId,
            quiz: &mut QuizAnswer<T>,
            now: BlockNumberFor<T>,
        ) -> DispatchResult {
            let profile = engine::build_profile(&quiz.answers).map_err(Error::<T>::from)?;
            let color = profile.overall_color;
            let score = profile.compatibility_score;

            let report = T::ReportStore::create(who, quiz.attempt, profile, false)?;

            quiz.completed = true;
            quiz.completed_at = Some(now);
            CompletedCount::<T>::mutate(|count| count.saturating_inc());

            log::info!(
                target: LOG_TARGET,
                "quiz completed: attempt {}, report #{}, score {}, color {:?}",
                quiz.attempt,
                report.id,
                score,
                color,
            );

            Self::deposit_event(Event::QuizCompleted {
                who: who.clone(),
                attempt: quiz.attempt,
                report_id: report.id,
                color,
                score,
            });

            Ok(())
        }

        /// 题目文本
        pub fn question_prompt(question_id: QuestionId) -> Option<&'static str> {
            questions::question(question_id).map(|q| q.prompt)
        }

        /// 预览画像（不写入存储）
        pub fn preview_profile(who: &T::AccountId) -> Result<CompatibilityProfile, DispatchError> {
            ensure!(T::AuthProvider::is_authenticated(who), Error::<T>::NotAuthenticated);
            let quiz = QuizAnswers::<T>::get(who).ok_or(Error::<T>::QuizNotFound)?;
            engine::build_profile(&quiz.answers).map_err(|e| Error::<T>::from(e).into())
        }
    }

    impl<T: Config> QuizAnswerStore<T::AccountId> for Pallet<T> {
        type Record = QuizAnswer<T>;

        fn get(who: &T::AccountId) -> Option<QuizAnswer<T>> {
            QuizAnswers::<T>::get(who)
        }

        fn save(
            who: &T::AccountId,
            answers: BTreeMap<QuestionId, OptionIndex>,
            completed: bool,
        ) -> Result<QuizAnswer<T>, DispatchError> {
            ensure!(T::AuthProvider::is_authenticated(who), Error::<T>::NotAuthenticated);
            scoring::validate_answers(&answers).map_err(Error::<T>::from)?;
            let missing = scoring::missing_required(&answers);
            if completed {
                ensure!(missing == 0, Error::<T>::IncompleteQuiz);
            }

            let now = frame_system::Pallet::<T>::block_number();
            let mut quiz = QuizAnswers::<T>::get(who).unwrap_or_else(|| QuizAnswer::new(now));
            ensure!(!quiz.completed, Error::<T>::QuizAlreadyCompleted);

            quiz.answers = BoundedBTreeMap::try_from(answers).map_err(|_| Error::<T>::TooManyAnswers)?;
            quiz.updated_at = now;

            if missing == 0 {
                Self::complete(who, &mut quiz, now)?;
            }

            QuizAnswers::<T>::insert(who, quiz.clone());

            Ok(quiz)
        }
    }
}
