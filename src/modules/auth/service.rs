use anyhow::anyhow;
use mongodb::bson::{self, doc};
use tracing::instrument;

use crate::modules::users::model::{User, UserProfile};
use crate::store::{DocumentStore, EntityKind, StoreError};
use crate::utils::digest::{demo_token, hash_password, verify_password};
use crate::utils::errors::AppError;

use super::model::{LoginDto, LoginResponse, RegisterDto};

pub struct AuthService;

impl AuthService {
    /// Register a new user: digest the password, insert the record, return
    /// the generated id. Email uniqueness is arbitrated by the store's
    /// unique index, never by a read-then-write check here.
    #[instrument(skip_all)]
    pub async fn register(store: &DocumentStore, dto: RegisterDto) -> Result<String, AppError> {
        if !store.is_available() {
            return Err(AppError::service_unavailable(anyhow!(
                "Database not available"
            )));
        }

        let user = User {
            name: dto.name,
            email: dto.email,
            password_hash: hash_password(&dto.password),
            major: dto.major,
            year: dto.year,
            avatar: None,
        };

        let document = bson::to_document(&user).map_err(AppError::internal)?;

        match store.create_document(EntityKind::User, document).await {
            Ok(id) => Ok(id),
            Err(StoreError::DuplicateKey) => {
                Err(AppError::bad_request(anyhow!("Email already registered")))
            }
            Err(err) => Err(AppError::store(err)),
        }
    }

    /// Verify credentials and issue the demo token.
    ///
    /// Unknown email and wrong password return the identical error so the
    /// response cannot be used to enumerate accounts.
    #[instrument(skip_all)]
    pub async fn login(store: &DocumentStore, dto: LoginDto) -> Result<LoginResponse, AppError> {
        if !store.is_available() {
            return Err(AppError::service_unavailable(anyhow!(
                "Database not available"
            )));
        }

        let document = store
            .find_one(EntityKind::User, doc! { "email": &dto.email }, None)
            .await
            .map_err(AppError::store)?;

        let Some(document) = document else {
            return Err(Self::invalid_credentials());
        };

        let user: User = bson::from_document(document).map_err(AppError::internal)?;

        if !verify_password(&dto.password, &user.password_hash) {
            return Err(Self::invalid_credentials());
        }

        let token = demo_token(&user.email);
        Ok(LoginResponse {
            token,
            profile: UserProfile::from(user),
        })
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized(anyhow!("Invalid credentials"))
    }
}
