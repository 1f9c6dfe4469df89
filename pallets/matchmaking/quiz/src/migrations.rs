//! # 存储迁移
//!
//! v0 -> v1：答题记录新增 `updated_at` 字段。
//!
//! 旧记录的 `updated_at` 取完成时间，未完成的取开始时间。

use super::*;
use frame_support::traits::UncheckedOnRuntimeUpgrade;

pub mod v1 {
    use super::*;

    /// v0 答题记录布局
    #[derive(Encode, Decode)]
    pub struct OldQuizAnswer<BlockNumber, MaxAnswers: Get<u32>> {
        pub answers: BoundedBTreeMap<QuestionId, OptionIndex, MaxAnswers>,
        pub completed: bool,
        pub attempt: u32,
        pub started_at: BlockNumber,
        pub completed_at: Option<BlockNumber>,
    }

    /// 不检查版本号的迁移实现，由 `MigrateToV1` 包装
    pub struct UncheckedMigrateToV1<T>(core::marker::PhantomData<T>);

    impl<T: Config> UncheckedOnRuntimeUpgrade for UncheckedMigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let mut translated: u64 = 0;

            QuizAnswers::<T>::translate::<OldQuizAnswer<BlockNumberFor<T>, T::MaxAnswers>, _>(
                |_who, old| {
                    translated += 1;
                    Some(QuizAnswer {
                        answers: old.answers,
                        completed: old.completed,
                        attempt: old.attempt,
                        started_at: old.started_at,
                        updated_at: old.completed_at.unwrap_or(old.started_at),
                        completed_at: old.completed_at,
                    })
                },
            );

            log::info!(
                target: LOG_TARGET,
                "🔧 backfilled updated_at on {} quiz records",
                translated,
            );

            T::DbWeight::get().reads_writes(translated, translated)
        }
    }

    /// 版本 0 -> 1 迁移
    pub type MigrateToV1<T> = frame_support::migrations::VersionedMigration<
        0,
        1,
        UncheckedMigrateToV1<T>,
        Pallet<T>,
        <T as frame_system::Config>::DbWeight,
    >;
}
