//! Current-property resolution for public, host-routed requests

use std::sync::Arc;
use tracing::{debug, error};

use pousada_shared::utils::{normalize_host, subdomain_of};

use crate::domain::PropertyOverview;
use crate::error::DomainError;
use crate::repositories::PropertyRepository;

pub struct SiteService {
    properties: Arc<dyn PropertyRepository>,
    base_domain: Option<String>,
}

impl SiteService {
    /// `base_domain` enables `<slug>.<base_domain>` routing when set.
    pub fn new(properties: Arc<dyn PropertyRepository>, base_domain: Option<String>) -> Self {
        let base_domain = base_domain
            .map(|d| d.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty());
        Self { properties, base_domain }
    }

    /// Property bound to a `Host` header value: custom domain first, then
    /// platform subdomain. Lookup failures are logged and count as no match.
    pub async fn resolve_host(&self, raw_host: &str) -> Option<PropertyOverview> {
        let host = normalize_host(raw_host)?;

        match self.properties.find_active_by_domain(&host).await {
            Ok(Some(found)) => {
                debug!("Host {} matched custom domain of property {}", host, found.property.id);
                return Some(found);
            }
            Ok(None) => {}
            Err(e) => {
                error!("Domain lookup failed for host {}: {}", host, e);
                return None;
            }
        }

        let label = subdomain_of(&host, self.base_domain.as_deref()?)?;
        match self.properties.find_active_by_slug(label).await {
            Ok(found) => found,
            Err(e) => {
                error!("Subdomain lookup failed for host {}: {}", host, e);
                None
            }
        }
    }

    /// The domain-bound property if any, else the active property named by
    /// `slug`.
    pub async fn current(
        &self,
        domain_property: Option<PropertyOverview>,
        slug: Option<&str>,
    ) -> Result<PropertyOverview, DomainError> {
        if let Some(found) = domain_property {
            return Ok(found);
        }
        let slug = slug
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::not_found("Property"))?;
        self.properties
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Property, PropertyInput};
    use crate::repositories::MockPropertyRepository;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn overview(slug: &str) -> PropertyOverview {
        let property = Property::create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            slug.to_string(),
            PropertyInput { name: "Pousada Sol".into(), ..Default::default() },
        );
        PropertyOverview { property, accommodations_count: 1 }
    }

    #[tokio::test]
    async fn test_custom_domain_wins() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_active_by_domain()
            .with(eq("pousadasol.com.br"))
            .returning(|_| Ok(Some(overview("pousada-sol"))));
        properties.expect_find_active_by_slug().never();

        let service = SiteService::new(Arc::new(properties), Some("hyfen.com".into()));
        let found = service.resolve_host("PousadaSol.com.br:443").await.unwrap();
        assert_eq!(found.property.slug, "pousada-sol");
    }

    #[tokio::test]
    async fn test_subdomain_fallback() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_active_by_domain().returning(|_| Ok(None));
        properties
            .expect_find_active_by_slug()
            .with(eq("pousada-sol"))
            .returning(|slug| Ok(Some(overview(slug))));

        let service = SiteService::new(Arc::new(properties), Some(".hyfen.com".into()));
        assert!(service.resolve_host("pousada-sol.hyfen.com").await.is_some());
    }

    #[tokio::test]
    async fn test_reserved_subdomain_and_errors_are_no_match() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_active_by_domain()
            .with(eq("www.hyfen.com"))
            .returning(|_| Ok(None));
        properties
            .expect_find_active_by_domain()
            .with(eq("broken.hyfen.com"))
            .returning(|_| Err(DomainError::DatabaseError("connection reset".into())));
        properties.expect_find_active_by_slug().never();

        let service = SiteService::new(Arc::new(properties), Some("hyfen.com".into()));
        assert!(service.resolve_host("www.hyfen.com").await.is_none());
        assert!(service.resolve_host("broken.hyfen.com").await.is_none());
        assert!(service.resolve_host("localhost:8000").await.is_none());
    }

    #[tokio::test]
    async fn test_current_prefers_domain_property() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_active_by_slug().never();
        let service = SiteService::new(Arc::new(properties), None);

        let found = service
            .current(Some(overview("pousada-sol")), Some("outra"))
            .await
            .unwrap();
        assert_eq!(found.property.slug, "pousada-sol");
    }

    #[tokio::test]
    async fn test_current_by_slug_or_not_found() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_active_by_slug()
            .returning(|slug| Ok((slug == "pousada-sol").then(|| overview(slug))));
        let service = SiteService::new(Arc::new(properties), None);

        assert!(service.current(None, Some("pousada-sol")).await.is_ok());
        assert!(matches!(service.current(None, Some("fechada")).await, Err(DomainError::NotFound(_))));
        assert!(matches!(service.current(None, None).await, Err(DomainError::NotFound(_))));
    }
}
