//! Merchant dashboard flows against a mock API: the no-page-yet
//! onboarding branch, page/product CRUD bookkeeping, and order listing.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;

use shopfront_client::{
    ApiError, ApiResult, AuthSession, MerchantApi, NewPage, NewProduct, PageUpdate, ProductUpdate,
};
use shopfront_core::{Money, Order, Page, Product};
use shopfront_session::{DashboardSession, DashboardState, SessionError};

// =============================================================================
// Mock Merchant API
// =============================================================================

#[derive(Clone)]
struct MockMerchant {
    page: Arc<Mutex<ApiResult<Page>>>,
    orders: Arc<Mutex<ApiResult<Vec<Order>>>>,
    create_product_calls: Arc<AtomicUsize>,
    next_product_id: Arc<AtomicUsize>,
}

impl MockMerchant {
    fn new(page: ApiResult<Page>, orders: ApiResult<Vec<Order>>) -> Self {
        MockMerchant {
            page: Arc::new(Mutex::new(page)),
            orders: Arc::new(Mutex::new(orders)),
            create_product_calls: Arc::new(AtomicUsize::new(0)),
            next_product_id: Arc::new(AtomicUsize::new(100)),
        }
    }
}

#[async_trait]
impl MerchantApi for MockMerchant {
    async fn fetch_my_page(&self, _session: &AuthSession) -> ApiResult<Page> {
        self.page.lock().unwrap().clone()
    }

    async fn create_page(&self, _session: &AuthSession, page: &NewPage) -> ApiResult<Page> {
        Ok(Page {
            id: 1,
            slug: "my-stall".into(),
            title: page.title.clone(),
            description: page.description.clone(),
            owner_id: 1,
            products: Vec::new(),
        })
    }

    async fn update_page(&self, session: &AuthSession, update: &PageUpdate) -> ApiResult<Page> {
        let mut page = self.fetch_my_page(session).await?;
        if let Some(title) = &update.title {
            page.title = title.clone();
        }
        if let Some(description) = &update.description {
            page.description = Some(description.clone());
        }
        Ok(page)
    }

    async fn create_product(
        &self,
        _session: &AuthSession,
        product: &NewProduct,
    ) -> ApiResult<Product> {
        self.create_product_calls.fetch_add(1, Ordering::SeqCst);
        let id = self.next_product_id.fetch_add(1, Ordering::SeqCst) as i64;
        Ok(Product {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        })
    }

    async fn update_product(
        &self,
        _session: &AuthSession,
        product_id: i64,
        update: &ProductUpdate,
    ) -> ApiResult<Product> {
        Ok(Product {
            id: product_id,
            name: update.name.clone().unwrap_or_else(|| "unchanged".into()),
            description: update.description.clone(),
            price: update.price.unwrap_or_else(Money::zero),
        })
    }

    async fn delete_product(
        &self,
        _session: &AuthSession,
        product_id: i64,
    ) -> ApiResult<Product> {
        Ok(Product {
            id: product_id,
            name: "deleted".into(),
            description: None,
            price: Money::zero(),
        })
    }

    async fn fetch_my_orders(&self, _session: &AuthSession) -> ApiResult<Vec<Order>> {
        self.orders.lock().unwrap().clone()
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn auth() -> AuthSession {
    AuthSession::new("tok-merchant")
}

fn existing_page() -> Page {
    Page {
        id: 1,
        slug: "chai-stall".into(),
        title: "Chai Stall".into(),
        description: None,
        owner_id: 1,
        products: vec![Product {
            id: 10,
            name: "Masala Chai".into(),
            description: None,
            price: Money::from_minor(10_000),
        }],
    }
}

fn received_order(id: i64) -> Order {
    Order {
        id,
        customer_name: "Asha".into(),
        customer_phone: "9999999999".into(),
        total_price: Money::from_minor(20_000),
        created_at: Utc::now(),
        items: Vec::new(),
    }
}

fn no_page() -> ApiResult<Page> {
    Err(ApiError::NotFound {
        detail: "Page not found".into(),
    })
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn open_loads_page_and_orders() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(vec![received_order(1)]));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    assert_eq!(dashboard.page().unwrap().slug, "chai-stall");
    assert_eq!(dashboard.orders().len(), 1);
}

#[tokio::test]
async fn missing_page_means_onboarding_not_failure() {
    let api = MockMerchant::new(no_page(), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    assert_eq!(dashboard.state(), &DashboardState::NoPageYet);
}

#[tokio::test]
async fn non_404_page_errors_are_real_failures() {
    let api = MockMerchant::new(
        Err(ApiError::Network("connection refused".into())),
        Ok(Vec::new()),
    );
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    match dashboard.state() {
        DashboardState::Failed(reason) => assert!(reason.contains("connection refused")),
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn order_list_failure_fails_the_load() {
    let api = MockMerchant::new(
        Ok(existing_page()),
        Err(ApiError::Unauthorized {
            detail: "Could not validate credentials".into(),
        }),
    );
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    assert!(matches!(dashboard.state(), DashboardState::Failed(_)));
}

// =============================================================================
// Page CRUD
// =============================================================================

#[tokio::test]
async fn create_page_moves_from_onboarding_to_ready() {
    let api = MockMerchant::new(no_page(), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    dashboard
        .create_page(NewPage {
            title: "My Stall".into(),
            description: None,
        })
        .await
        .unwrap();

    let page = dashboard.page().unwrap();
    assert_eq!(page.title, "My Stall");
    assert!(page.products.is_empty());
    assert!(dashboard.orders().is_empty());
}

#[tokio::test]
async fn create_page_rejects_blank_title_locally() {
    let api = MockMerchant::new(no_page(), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    let err = dashboard
        .create_page(NewPage {
            title: "   ".into(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));
    assert_eq!(dashboard.state(), &DashboardState::NoPageYet);
}

#[tokio::test]
async fn update_page_replaces_the_local_copy() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    dashboard
        .update_page(PageUpdate {
            title: Some("Chai Stall Deluxe".into()),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(dashboard.page().unwrap().title, "Chai Stall Deluxe");
}

// =============================================================================
// Product CRUD
// =============================================================================

#[tokio::test]
async fn add_product_appends_to_the_local_page() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api.clone(), auth());
    dashboard.open().await;

    dashboard
        .add_product(NewProduct {
            name: "Samosa".into(),
            description: None,
            price: Money::from_minor(5_000),
        })
        .await
        .unwrap();

    let products = &dashboard.page().unwrap().products;
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].name, "Samosa");
}

#[tokio::test]
async fn invalid_product_never_reaches_the_api() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api.clone(), auth());
    dashboard.open().await;

    let err = dashboard
        .add_product(NewProduct {
            name: "".into(),
            description: None,
            price: Money::from_minor(5_000),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));

    let err = dashboard
        .add_product(NewProduct {
            name: "Samosa".into(),
            description: None,
            price: Money::from_minor(-100),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));

    assert_eq!(api.create_product_calls.load(Ordering::SeqCst), 0);
    assert_eq!(dashboard.page().unwrap().products.len(), 1);
}

#[tokio::test]
async fn update_product_replaces_in_place() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    dashboard
        .update_product(
            10,
            ProductUpdate {
                name: Some("Cutting Chai".into()),
                price: Some(Money::from_minor(7_500)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let products = &dashboard.page().unwrap().products;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Cutting Chai");
    assert_eq!(products[0].price, Money::from_minor(7_500));
}

#[tokio::test]
async fn remove_product_returns_the_deleted_product() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    let deleted = dashboard.remove_product(10).await.unwrap();
    assert_eq!(deleted.id, 10);
    assert!(dashboard.page().unwrap().products.is_empty());
}

#[tokio::test]
async fn unknown_product_id_is_rejected_locally() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(Vec::new()));
    let mut dashboard = DashboardSession::new(api, auth());
    dashboard.open().await;

    let err = dashboard.remove_product(999).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::UnknownProduct { product_id: 999 }
    ));
    assert_eq!(dashboard.page().unwrap().products.len(), 1);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn refresh_orders_replaces_the_list() {
    let api = MockMerchant::new(Ok(existing_page()), Ok(vec![received_order(1)]));
    let mut dashboard = DashboardSession::new(api.clone(), auth());
    dashboard.open().await;
    assert_eq!(dashboard.orders().len(), 1);

    *api.orders.lock().unwrap() = Ok(vec![received_order(1), received_order(2)]);
    dashboard.refresh_orders().await.unwrap();
    assert_eq!(dashboard.orders().len(), 2);
}
