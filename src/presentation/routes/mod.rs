// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::house_category_use_case::HouseCategoryService;
use crate::application::use_cases::package_use_case::PackageService;
use crate::application::use_cases::quotation_use_case::QuotationService;
use crate::application::use_cases::subcategory_use_case::SubcategoryService;
use crate::application::use_cases::user_use_case::UserService;
use crate::config::settings::Settings;
use crate::domain::repositories::document_store::DocumentStore;
use crate::presentation::handlers::{diagnostics_handler, record_handler, user_handler};
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 每个实体服务以 `Extension` 注入，处理器按服务类型单态化
///
/// # 参数
///
/// * `store` - 文档存储网关
/// * `settings` - 应用配置（诊断端点使用）
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<S: DocumentStore + 'static>(store: Arc<S>, settings: Arc<Settings>) -> Router {
    let users = Arc::new(UserService::new(store.clone()));
    let house_categories = Arc::new(HouseCategoryService::new(store.clone()));
    let subcategories = Arc::new(SubcategoryService::new(store.clone()));
    let packages = Arc::new(PackageService::new(store.clone()));
    let quotations = Arc::new(QuotationService::new(store.clone()));

    let public_routes = Router::new()
        .route("/", get(diagnostics_handler::root))
        .route("/health", get(health_check))
        .route("/test", get(diagnostics_handler::diagnostics::<S>));

    let record_routes = Router::new()
        .route(
            "/users",
            get(record_handler::list_records::<UserService<S>>)
                .post(record_handler::create_record::<UserService<S>>),
        )
        .route("/users/{user_id}", get(user_handler::get_user::<S>))
        .route(
            "/house-categories",
            get(record_handler::list_records::<HouseCategoryService<S>>)
                .post(record_handler::create_record::<HouseCategoryService<S>>),
        )
        .route(
            "/subcategories",
            get(record_handler::list_records::<SubcategoryService<S>>)
                .post(record_handler::create_record::<SubcategoryService<S>>),
        )
        .route(
            "/packages",
            get(record_handler::list_records::<PackageService<S>>)
                .post(record_handler::create_record::<PackageService<S>>),
        )
        .route(
            "/quotations",
            get(record_handler::list_records::<QuotationService<S>>)
                .post(record_handler::create_record::<QuotationService<S>>),
        );

    Router::new()
        .merge(public_routes)
        .merge(record_routes)
        .layer(Extension(users))
        .layer(Extension(house_categories))
        .layer(Extension(subcategories))
        .layer(Extension(packages))
        .layer(Extension(quotations))
        .layer(Extension(store))
        .layer(Extension(settings))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}
