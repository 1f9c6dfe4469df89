//! # 婚恋模块 - 测验报告
//!
//! 本模块保存性格测验生成的兼容性报告，每个用户仅保留一份。
//!
//! ## 功能概述
//!
//! - **报告写入**：由测验模块通过 `QuizReportStore` 接口创建或覆盖
//! - **付费状态**：由 `PaymentOrigin`（支付回调或治理）更新
//! - **颜色索引**：按兼容性颜色等级检索用户
//!
//! ## 重新测验
//!
//! 再次完成测验时报告原地覆盖：ID、创建时间和付费状态保持不变。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use sp_runtime::traits::Saturating;
use sp_std::vec::Vec;

use pallet_matchmaking_common::{
    CompatibilityColor, CompatibilityProfile, QuizReport, QuizReportStore, ReportId,
};

pub(crate) const LOG_TARGET: &str = "runtime::matchmaking-report";

/// 报告类型别名
pub type QuizReportOf<T> =
    QuizReport<<T as frame_system::Config>::AccountId, BlockNumberFor<T>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Pallet 配置
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 运行时事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 可更新付费状态的来源
        type PaymentOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 报告存储
    #[pallet::storage]
    #[pallet::getter(fn reports)]
    pub type Reports<T: Config> = StorageMap<_, Blake2_128Concat, ReportId, QuizReportOf<T>>;

    /// 用户 -> 报告 ID
    #[pallet::storage]
    pub type ReportOf<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, ReportId>;

    /// 颜色索引
    #[pallet::storage]
    pub type ColorIndex<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        CompatibilityColor,
        Blake2_128Concat,
        T::AccountId,
        (),
    >;

    /// 下一个报告 ID
    #[pallet::storage]
    #[pallet::getter(fn next_report_id)]
    pub type NextReportId<T: Config> = StorageValue<_, ReportId, ValueQuery>;

    /// 报告总数
    #[pallet::storage]
    #[pallet::getter(fn report_count)]
    pub type ReportCount<T: Config> = StorageValue<_, u64, ValueQuery>;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 报告已创建
        ReportCreated {
            report_id: ReportId,
            owner: T::AccountId,
            color: CompatibilityColor,
        },
        /// 报告已被重新测验覆盖
        ReportUpdated {
            report_id: ReportId,
            owner: T::AccountId,
            color: CompatibilityColor,
        },
        /// 付费状态已更新
        PaymentStatusUpdated {
            report_id: ReportId,
            is_paid: bool,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 报告不存在
        ReportNotFound,
        /// 付费状态未变化
        PaymentStatusUnchanged,
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 更新报告付费状态
        ///
        /// 仅 `PaymentOrigin` 可调用。
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_payment_status())]
        pub fn set_payment_status(
            origin: OriginFor<T>,
            report_id: ReportId,
            is_paid: bool,
        ) -> DispatchResult {
            T::PaymentOrigin::ensure_origin(origin)?;

            let report = Reports::<T>::get(report_id).ok_or(Error::<T>::ReportNotFound)?;
            ensure!(report.is_paid != is_paid, Error::<T>::PaymentStatusUnchanged);

            Self::do_update_payment_status(report_id, is_paid)?;
            Ok(())
        }
    }

    // ========================================================================
    // 内部函数
    // ========================================================================

    impl<T: Config> Pallet<T> {
        /// 用户当前报告
        pub fn report_of(who: &T::AccountId) -> Option<QuizReportOf<T>> {
            ReportOf::<T>::get(who).and_then(Reports::<T>::get)
        }

        /// 指定颜色等级的全部用户
        pub fn accounts_with_color(color: CompatibilityColor) -> Vec<T::AccountId> {
            ColorIndex::<T>::iter_key_prefix(color).collect()
        }

        /// 创建或覆盖报告
        fn do_upsert(
            who: &T::AccountId,
            quiz_id: u32,
            profile: CompatibilityProfile,
            is_paid: bool,
        ) -> QuizReportOf<T> {
            let now = frame_system::Pallet::<T>::block_number();
            let color = profile.overall_color;

            let report = match Self::report_of(who) {
                Some(mut existing) => {
                    ColorIndex::<T>::remove(existing.compatibility_color, who);

                    existing.quiz_id = quiz_id;
                    existing.profile = profile;
                    existing.is_paid = existing.is_paid || is_paid;
                    existing.compatibility_color = color;
                    existing.updated_at = now;

                    log::debug!(
                        target: LOG_TARGET,
                        "report #{} overwritten by attempt {}",
                        existing.id,
                        quiz_id,
                    );

                    Self::deposit_event(Event::ReportUpdated {
                        report_id: existing.id,
                        owner: who.clone(),
                        color,
                    });
                    existing
                },
                None => {
                    let report_id = NextReportId::<T>::mutate(|id| {
                        let current = *id;
                        *id = id.saturating_add(1);
                        current
                    });
                    ReportCount::<T>::mutate(|count| count.saturating_inc());
                    ReportOf::<T>::insert(who, report_id);

                    log::info!(target: LOG_TARGET, "📝 report #{} created", report_id);

                    Self::deposit_event(Event::ReportCreated {
                        report_id,
                        owner: who.clone(),
                        color,
                    });
                    QuizReport {
                        id: report_id,
                        owner: who.clone(),
                        quiz_id,
                        profile,
                        is_paid,
                        compatibility_color: color,
                        created_at: now,
                        updated_at: now,
                    }
                },
            };

            Reports::<T>::insert(report.id, &report);
            ColorIndex::<T>::insert(color, who, ());

            report
        }

        /// 写入付费状态
        fn do_update_payment_status(
            report_id: ReportId,
            is_paid: bool,
        ) -> Result<QuizReportOf<T>, DispatchError> {
            let now = frame_system::Pallet::<T>::block_number();

            let report = Reports::<T>::try_mutate(report_id, |maybe_report| -> Result<QuizReportOf<T>, DispatchError> {
                let report = maybe_report.as_mut().ok_or(Error::<T>::ReportNotFound)?;
                report.is_paid = is_paid;
                report.updated_at = now;
                Ok(report.clone())
            })?;

            log::info!(
                target: LOG_TARGET,
                "💳 report #{} payment status set to {}",
                report_id,
                is_paid,
            );

            Self::deposit_event(Event::PaymentStatusUpdated { report_id, is_paid });

            Ok(report)
        }
    }

    impl<T: Config> QuizReportStore<T::AccountId, BlockNumberFor<T>> for Pallet<T> {
        fn create(
            who: &T::AccountId,
            quiz_id: u32,
            profile: CompatibilityProfile,
            is_paid: bool,
        ) -> Result<QuizReportOf<T>, DispatchError> {
            Ok(Self::do_upsert(who, quiz_id, profile, is_paid))
        }

        fn update_payment_status(
            report_id: ReportId,
            is_paid: bool,
        ) -> Result<QuizReportOf<T>, DispatchError> {
            Self::do_update_payment_status(report_id, is_paid)
        }

        fn report_of(who: &T::AccountId) -> Option<QuizReportOf<T>> {
            Pallet::<T>::report_of(who)
        }
    }
}
