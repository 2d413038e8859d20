// ============================================================================
// Pousada Core - Property Service
// File: crates/pousada-core/src/services/property_service.rs
// ============================================================================
//! Owner-scoped property management plus the public slug lookup

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use pousada_shared::utils::slugify;
use pousada_shared::{Page, Pagination};

use crate::domain::{
    Property, PropertyAccess, PropertyInput, PropertyOverview, PropertyPatch, User, UserSummary,
};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, TenantRepository};

use super::{slug_candidate, MAX_SLUG_ATTEMPTS};

/// Detail projection: the property, its accommodation count and its owner.
#[derive(Debug, Clone)]
pub struct PropertyDetail {
    pub overview: PropertyOverview,
    pub owner: UserSummary,
}

pub struct PropertyService {
    properties: Arc<dyn PropertyRepository>,
    tenants: Arc<dyn TenantRepository>,
}

impl PropertyService {
    pub fn new(properties: Arc<dyn PropertyRepository>, tenants: Arc<dyn TenantRepository>) -> Self {
        Self { properties, tenants }
    }

    /// Active properties of `owner`, newest first.
    pub async fn list(
        &self,
        owner: &User,
        pagination: Pagination,
    ) -> Result<Page<PropertyOverview>, DomainError> {
        let pagination = pagination.normalized();
        let (rows, count) = self.properties.list_owned(&owner.id, pagination).await?;
        Ok(Page::new(rows, count, pagination))
    }

    pub async fn create(&self, owner: &User, input: PropertyInput) -> Result<PropertyDetail, DomainError> {
        input.validate()?;

        let tenant = match input.tenant_id {
            Some(tenant_id) => self
                .tenants
                .find_by_id(&tenant_id)
                .await?
                .filter(|t| t.is_active && t.is_owned_by(&owner.id))
                .ok_or_else(|| DomainError::invalid("tenant_id", "Unknown tenant"))?,
            None => self
                .tenants
                .first_owned_by(&owner.id)
                .await?
                .ok_or_else(|| DomainError::invalid("tenant_id", "User has no tenant"))?,
        };

        let slug = self.resolve_slug(input.slug.as_deref(), &input.name, None).await?;
        let property = Property::create(tenant.id, owner.id, slug, input);
        let access = PropertyAccess::owner(owner.id, property.id);

        let created = self.properties.create(&property, &access).await?;
        info!("Property {} ({}) created by user {}", created.id, created.slug, owner.id);

        Ok(PropertyDetail {
            overview: PropertyOverview { property: created, accommodations_count: 0 },
            owner: UserSummary::from(owner),
        })
    }

    pub async fn retrieve(&self, owner: &User, id: &Uuid) -> Result<PropertyDetail, DomainError> {
        let overview = self.owned(owner, id).await?;
        Ok(PropertyDetail { overview, owner: UserSummary::from(owner) })
    }

    /// Full update (PUT). Omitting `slug` keeps the current one.
    pub async fn replace(
        &self,
        owner: &User,
        id: &Uuid,
        mut input: PropertyInput,
    ) -> Result<PropertyDetail, DomainError> {
        input.validate()?;
        let overview = self.owned(owner, id).await?;
        if input.slug.as_deref().map_or(true, |s| s.trim().is_empty()) {
            input.slug = Some(overview.property.slug.clone());
        }
        self.save(owner, overview, input).await
    }

    /// Partial update (PATCH). The merged result is validated as a whole.
    pub async fn patch(
        &self,
        owner: &User,
        id: &Uuid,
        patch: PropertyPatch,
    ) -> Result<PropertyDetail, DomainError> {
        let overview = self.owned(owner, id).await?;
        let mut input = PropertyInput::from(&overview.property);
        patch.merge_into(&mut input);
        input.validate()?;
        self.save(owner, overview, input).await
    }

    /// Marks the property inactive and stamps `deleted_at`.
    pub async fn soft_delete(&self, owner: &User, id: &Uuid) -> Result<(), DomainError> {
        let mut property = self.owned(owner, id).await?.property;
        property.soft_delete();
        self.properties.update(&property).await?;
        info!("Property {} soft-deleted by user {}", id, owner.id);
        Ok(())
    }

    /// Active property by slug, no authentication involved.
    pub async fn public_by_slug(&self, slug: &str) -> Result<PropertyOverview, DomainError> {
        self.properties
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    async fn owned(&self, owner: &User, id: &Uuid) -> Result<PropertyOverview, DomainError> {
        self.properties
            .find_owned(&owner.id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    async fn save(
        &self,
        owner: &User,
        overview: PropertyOverview,
        input: PropertyInput,
    ) -> Result<PropertyDetail, DomainError> {
        let PropertyOverview { mut property, accommodations_count } = overview;
        let slug = self
            .resolve_slug(input.slug.as_deref(), &input.name, Some(property.id))
            .await?;
        property.apply(slug, input);

        let updated = self.properties.update(&property).await?;
        info!("Property {} updated by user {}", updated.id, owner.id);

        Ok(PropertyDetail {
            overview: PropertyOverview { property: updated, accommodations_count },
            owner: UserSummary::from(owner),
        })
    }

    /// An explicit slug must be free; a derived one gets a numeric suffix.
    async fn resolve_slug(
        &self,
        requested: Option<&str>,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<String, DomainError> {
        if let Some(slug) = requested.map(str::trim).filter(|s| !s.is_empty()) {
            if self.properties.slug_in_use(slug, except).await? {
                warn!("Property slug already taken: {}", slug);
                return Err(DomainError::invalid("slug", "A property with this slug already exists"));
            }
            return Ok(slug.to_string());
        }

        let base = slugify(name);
        if base.is_empty() {
            return Err(DomainError::invalid("name", "Name must contain letters or digits"));
        }
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = slug_candidate(&base, attempt);
            if !self.properties.slug_in_use(&candidate, except).await? {
                return Ok(candidate);
            }
        }
        Err(DomainError::invalid("slug", "Unable to generate a unique slug"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tenant;
    use crate::repositories::{MockPropertyRepository, MockTenantRepository};
    use mockall::predicate::{always, eq};

    fn owner() -> User {
        User::new("Ana".into(), "Silva".into(), "ana@pousada.com".into(), "hash".into()).unwrap()
    }

    fn input(name: &str) -> PropertyInput {
        PropertyInput { name: name.to_string(), ..Default::default() }
    }

    fn overview(owner: &User, name: &str, slug: &str) -> PropertyOverview {
        let property = Property::create(Uuid::new_v4(), owner.id, slug.to_string(), input(name));
        PropertyOverview { property, accommodations_count: 2 }
    }

    fn tenants_with(tenant: Tenant) -> MockTenantRepository {
        let mut tenants = MockTenantRepository::new();
        let t = tenant.clone();
        tenants.expect_first_owned_by().returning(move |_| Ok(Some(t.clone())));
        tenants.expect_find_by_id().returning(move |_| Ok(Some(tenant.clone())));
        tenants
    }

    #[tokio::test]
    async fn test_create_defaults_tenant_and_slug() {
        let user = owner();
        let tenant = Tenant::new(user.id, "Empresa Pousada".into()).unwrap();
        let tenant_id = tenant.id;

        let mut properties = MockPropertyRepository::new();
        properties.expect_slug_in_use().returning(|_, _| Ok(false));
        properties
            .expect_create()
            .withf(move |p, access| {
                p.tenant_id == tenant_id && p.slug == "pousada-sol" && access.property_id == p.id
            })
            .times(1)
            .returning(|p, _| Ok(p.clone()));

        let service = PropertyService::new(Arc::new(properties), Arc::new(tenants_with(tenant)));
        let detail = service.create(&user, input("Pousada Sol")).await.unwrap();

        assert_eq!(detail.overview.property.owner_id, user.id);
        assert_eq!(detail.overview.accommodations_count, 0);
        assert_eq!(detail.owner.email, "ana@pousada.com");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_zip_code() {
        let user = owner();
        let service = PropertyService::new(
            Arc::new(MockPropertyRepository::new()),
            Arc::new(MockTenantRepository::new()),
        );
        let mut bad = input("Pousada Sol");
        bad.zip_code = Some("123".into());

        let err = service.create(&user, bad).await.unwrap_err();
        match err {
            DomainError::Validation(errors) => assert!(errors.field_errors().contains_key("zip_code")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_explicit_slug_conflict() {
        let user = owner();
        let tenant = Tenant::new(user.id, "Empresa Pousada".into()).unwrap();
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_slug_in_use()
            .with(eq("pousada-sol"), always())
            .returning(|_, _| Ok(true));
        properties.expect_create().never();

        let service = PropertyService::new(Arc::new(properties), Arc::new(tenants_with(tenant)));
        let mut req = input("Pousada Sol");
        req.slug = Some("pousada-sol".into());

        let err = service.create(&user, req).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "slug", .. }));
    }

    #[tokio::test]
    async fn test_create_derived_slug_gets_suffix() {
        let user = owner();
        let tenant = Tenant::new(user.id, "Empresa Pousada".into()).unwrap();
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_slug_in_use()
            .returning(|slug, _| Ok(slug == "pousada-sol"));
        properties.expect_create().returning(|p, _| Ok(p.clone()));

        let service = PropertyService::new(Arc::new(properties), Arc::new(tenants_with(tenant)));
        let detail = service.create(&user, input("Pousada Sol")).await.unwrap();
        assert_eq!(detail.overview.property.slug, "pousada-sol-2");
    }

    #[tokio::test]
    async fn test_create_with_foreign_tenant() {
        let user = owner();
        let foreign = Tenant::new(Uuid::new_v4(), "Outra Empresa".into()).unwrap();
        let service = PropertyService::new(
            Arc::new(MockPropertyRepository::new()),
            Arc::new(tenants_with(foreign.clone())),
        );
        let mut req = input("Pousada Sol");
        req.tenant_id = Some(foreign.id);

        let err = service.create(&user, req).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "tenant_id", .. }));
    }

    #[tokio::test]
    async fn test_create_without_tenant() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_first_owned_by().returning(|_| Ok(None));
        let service = PropertyService::new(Arc::new(MockPropertyRepository::new()), Arc::new(tenants));

        let err = service.create(&owner(), input("Pousada Sol")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "tenant_id", .. }));
    }

    #[tokio::test]
    async fn test_patch_keeps_unsupplied_fields() {
        let user = owner();
        let mut current = overview(&user, "Pousada Sol", "pousada-sol");
        current.property.city = Some("Paraty".into());
        let id = current.property.id;

        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(current.clone())));
        properties
            .expect_slug_in_use()
            .with(eq("pousada-sol"), eq(Some(id)))
            .returning(|_, _| Ok(false));
        properties.expect_update().returning(|p| Ok(p.clone()));

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockTenantRepository::new()));
        let patch = PropertyPatch { phone: Some("+55 24 3371-0000".into()), ..Default::default() };
        let detail = service.patch(&user, &id, patch).await.unwrap();

        let p = &detail.overview.property;
        assert_eq!(p.city.as_deref(), Some("Paraty"));
        assert_eq!(p.phone.as_deref(), Some("+55 24 3371-0000"));
        assert_eq!(detail.overview.accommodations_count, 2);
    }

    #[tokio::test]
    async fn test_replace_without_slug_keeps_custom_slug() {
        let user = owner();
        let current = overview(&user, "Pousada Sol", "sol-de-paraty");
        let id = current.property.id;

        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(current.clone())));
        properties
            .expect_slug_in_use()
            .with(eq("sol-de-paraty"), eq(Some(id)))
            .times(1)
            .returning(|_, _| Ok(false));
        properties.expect_update().returning(|p| Ok(p.clone()));

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockTenantRepository::new()));
        let detail = service.replace(&user, &id, input("Pousada Sol Nascente")).await.unwrap();

        let p = &detail.overview.property;
        assert_eq!(p.slug, "sol-de-paraty");
        assert_eq!(p.name, "Pousada Sol Nascente");
    }

    #[tokio::test]
    async fn test_patch_validates_zip_code() {
        let user = owner();
        let current = overview(&user, "Pousada Sol", "pousada-sol");
        let id = current.property.id;
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(current.clone())));
        properties.expect_update().never();

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockTenantRepository::new()));
        let patch = PropertyPatch { zip_code: Some("1234".into()), ..Default::default() };
        assert!(matches!(
            service.patch(&user, &id, patch).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_retrieve_other_owner_is_not_found() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_owned().returning(|_, _| Ok(None));
        let service = PropertyService::new(Arc::new(properties), Arc::new(MockTenantRepository::new()));

        let err = service.retrieve(&owner(), &Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_soft_delete_marks_inactive() {
        let user = owner();
        let current = overview(&user, "Pousada Sol", "pousada-sol");
        let id = current.property.id;
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_owned()
            .returning(move |_, _| Ok(Some(current.clone())));
        properties
            .expect_update()
            .withf(|p| !p.is_active && p.deleted_at.is_some())
            .times(1)
            .returning(|p| Ok(p.clone()));

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockTenantRepository::new()));
        service.soft_delete(&user, &id).await.unwrap();
    }

    #[tokio::test]
    async fn test_public_by_slug_missing() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_active_by_slug().returning(|_| Ok(None));
        let service = PropertyService::new(Arc::new(properties), Arc::new(MockTenantRepository::new()));

        assert!(matches!(
            service.public_by_slug("fechada").await,
            Err(DomainError::NotFound(_))
        ));
    }
}
