//! 第一个扫描包：用户相关组件

use component_macros::component;
use infrastructure_common::BoxError;

/// 用户数据访问组件
#[component(constructor = "UserDao::connect")]
#[derive(Debug)]
pub struct UserDao;

impl UserDao {
    fn connect() -> Result<Self, BoxError> {
        Ok(Self)
    }
}

/// 用户服务
#[component]
#[derive(Debug, Default)]
pub struct UserService;

/// 审计记录，每次请求都创建新实例
#[component(transient)]
#[derive(Debug, Default)]
pub struct AuditTrail;
