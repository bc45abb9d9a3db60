// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::application::use_cases::user_use_case::UserService;
use crate::domain::models::user::User;
use crate::domain::repositories::document_store::DocumentStore;
use crate::presentation::errors::AppError;
use axum::{extract::Path, Extension, Json};
use std::sync::Arc;

/// 按标识符获取用户
pub async fn get_user<S: DocumentStore + 'static>(
    Extension(service): Extension<Arc<UserService<S>>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = service.get_by_id(&user_id).await?;
    Ok(Json(user))
}
