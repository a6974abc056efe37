//! Admin product management, including multipart image upload.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

use rcolly_core::{CategoryId, ProductId, Sizes};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::product::{NewProduct, Product, ProductUpdate};
use crate::services::upload::UploadError;
use crate::state::AppState;

/// `GET /api/admin/products` - All products, newest first.
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list(None).await?;
    Ok(Json(products))
}

/// Response to a product create.
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub id: ProductId,
    pub message: String,
}

/// `POST /api/admin/products` - Create a product from a multipart form.
///
/// The form carries text fields (`name`, `description`, `price`,
/// `categoryId`, `stockQuantity`, `sizes`) plus an optional `image` file
/// part that is stored on disk before the row is inserted.
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreateProductResponse>)> {
    let mut form = ProductForm::from_multipart(multipart).await?;

    let image_url = match form.image.take() {
        Some((filename, data)) => Some(
            state
                .uploads()
                .save_image(&filename, &data)
                .await
                .map_err(upload_error)?,
        ),
        None => None,
    };

    let product = NewProduct {
        name: form.require_name()?,
        description: form.description.clone(),
        price: form.require_price()?,
        category_id: form.category_id()?,
        image_url,
        stock_quantity: form.stock_quantity()?,
        sizes: form.sizes(),
    };

    let id = ProductRepository::new(state.pool()).create(&product).await?;

    tracing::info!(product_id = %id, name = %product.name, "product created");

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            id,
            message: "Product created successfully".to_string(),
        }),
    ))
}

/// `PUT /api/admin/products/{id}` - Update a product from a multipart form.
///
/// Same form shape as create; when no `image` part is sent the stored
/// image URL is left as-is.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    _admin: RequireAdmin,
    multipart: Multipart,
) -> Result<Json<Value>> {
    let mut form = ProductForm::from_multipart(multipart).await?;

    let image_url = match form.image.take() {
        Some((filename, data)) => Some(
            state
                .uploads()
                .save_image(&filename, &data)
                .await
                .map_err(upload_error)?,
        ),
        None => None,
    };

    let update = ProductUpdate {
        name: form.require_name()?,
        description: form.description.clone(),
        price: form.require_price()?,
        category_id: form.category_id()?,
        image_url,
        stock_quantity: form.stock_quantity()?,
        sizes: form.sizes(),
    };

    ProductRepository::new(state.pool()).update(id, &update).await?;

    Ok(Json(json!({ "message": "Product updated successfully" })))
}

/// `DELETE /api/admin/products/{id}` - Delete a product.
///
/// Line items referencing the product survive; their `product_id`
/// becomes null.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    _admin: RequireAdmin,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool()).delete(id).await?;

    tracing::info!(product_id = %id, "product deleted");

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

/// Collected multipart form fields for a product create or update.
#[derive(Debug, Default)]
struct ProductForm {
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    category_id: Option<String>,
    stock_quantity: Option<String>,
    sizes: Option<String>,
    image: Option<(String, Vec<u8>)>,
}

impl ProductForm {
    /// Drain a multipart stream into its known fields. Unknown parts are
    /// ignored.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed form data: {e}")))?
        {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };

            if name == "image" {
                let filename = field
                    .file_name()
                    .map_or_else(|| "upload".to_string(), ToOwned::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed form data: {e}")))?;
                form.image = Some((filename, data.to_vec()));
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Malformed form data: {e}")))?;

            match name.as_str() {
                "name" => form.name = Some(value),
                "description" => form.description = Some(value),
                "price" => form.price = Some(value),
                "categoryId" => form.category_id = Some(value),
                "stockQuantity" => form.stock_quantity = Some(value),
                "sizes" => form.sizes = Some(value),
                _ => {}
            }
        }

        Ok(form)
    }

    fn require_name(&self) -> Result<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(ToOwned::to_owned)
            .ok_or_else(|| AppError::BadRequest("Missing required fields".to_string()))
    }

    fn require_price(&self) -> Result<Decimal> {
        let raw = self
            .price
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Missing required fields".to_string()))?;
        raw.trim()
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid price".to_string()))
    }

    /// Empty or missing `categoryId` means "uncategorized".
    fn category_id(&self) -> Result<Option<CategoryId>> {
        match self.category_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i32>()
                .map(|id| Some(CategoryId::new(id)))
                .map_err(|_| AppError::BadRequest("Invalid category".to_string())),
        }
    }

    /// Missing stock defaults to zero.
    fn stock_quantity(&self) -> Result<i32> {
        match self.stock_quantity.as_deref().map(str::trim) {
            None | Some("") => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::BadRequest("Invalid stock quantity".to_string())),
        }
    }

    fn sizes(&self) -> Sizes {
        self.sizes.as_deref().map(Sizes::parse).unwrap_or_default()
    }
}

fn upload_error(err: UploadError) -> AppError {
    match err {
        UploadError::Empty => AppError::BadRequest("Uploaded image is empty".to_string()),
        UploadError::Io(e) => AppError::Internal(format!("failed to store upload: {e}")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: Some("Classic Cap".to_string()),
            description: Some("A cap".to_string()),
            price: Some("35.00".to_string()),
            category_id: Some("2".to_string()),
            stock_quantity: Some("25".to_string()),
            sizes: Some("S, M, L".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_form_parses_fields() {
        let form = filled_form();
        assert_eq!(form.require_name().unwrap(), "Classic Cap");
        assert_eq!(form.require_price().unwrap(), Decimal::new(3500, 2));
        assert_eq!(form.category_id().unwrap(), Some(CategoryId::new(2)));
        assert_eq!(form.stock_quantity().unwrap(), 25);
        assert_eq!(form.sizes().as_str(), "S,M,L");
    }

    #[test]
    fn test_form_missing_name_is_bad_request() {
        let form = ProductForm {
            name: None,
            ..filled_form()
        };
        assert!(matches!(
            form.require_name().unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn test_form_unparseable_price() {
        let form = ProductForm {
            price: Some("cheap".to_string()),
            ..filled_form()
        };
        assert!(matches!(
            form.require_price().unwrap_err(),
            AppError::BadRequest(msg) if msg == "Invalid price"
        ));
    }

    #[test]
    fn test_form_empty_category_means_none() {
        let form = ProductForm {
            category_id: Some(String::new()),
            ..filled_form()
        };
        assert_eq!(form.category_id().unwrap(), None);
    }

    #[test]
    fn test_form_missing_stock_defaults_to_zero() {
        let form = ProductForm {
            stock_quantity: None,
            ..filled_form()
        };
        assert_eq!(form.stock_quantity().unwrap(), 0);
    }
}
