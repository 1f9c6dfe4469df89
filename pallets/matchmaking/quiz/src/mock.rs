//! 性格测验模块测试 Mock

use crate as pallet_matchmaking_quiz;
use frame_support::{derive_impl, parameter_types};
use frame_system::EnsureRoot;
use pallet_matchmaking_common::QuizAuthProvider;
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
/// 会话无效的账户
pub const MALLORY: u64 = 99;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Report: pallet_matchmaking_report,
        Quiz: pallet_matchmaking_quiz,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_matchmaking_report::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type PaymentOrigin = EnsureRoot<u64>;
    type WeightInfo = ();
}

/// 除 MALLORY 外均视为已登录
pub struct MockAuth;
impl QuizAuthProvider<u64> for MockAuth {
    fn is_authenticated(who: &u64) -> bool {
        *who != MALLORY
    }
}

parameter_types! {
    pub const MaxAnswers: u32 = 32;
}

impl pallet_matchmaking_quiz::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxAnswers = MaxAnswers;
    type ReportStore = Report;
    type AuthProvider = MockAuth;
    type WeightInfo = ();
}

/// 构建测试外部环境
pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// 推进到指定区块
pub fn run_to_block(n: u64) {
    System::set_block_number(n);
}
