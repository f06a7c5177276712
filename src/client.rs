//! Blocking WS2 search client.
//!
//! Every search goes through [`Ws2Client::search`]: encode the parameters,
//! issue one GET, decode the `<{entity}-list>` payload and flatten it into a
//! [`SearchResponse`]. The per-entity methods only pick the entity type.

use std::io::Read;
use std::sync::{Arc, RwLock};

use log::{debug, warn};
use url::Url;

use crate::config::{ClientConfig, ClientInfo};
use crate::entity::{
    Annotation, Area, Artist, CdStub, EntityKind, FreedbDisc, Label, Place, Recording, Release,
    ReleaseGroup, SearchEntity, Tag, Work,
};
use crate::error::{Result, Ws2Error};
use crate::query::SearchParams;
use crate::response::{ScoredList, SearchResponse};
use crate::xml::parse_document;

const ERROR_BODY_SNIPPET_CHARS: usize = 120;

/// Root address and identification, swapped as a unit by the setters.
#[derive(Debug, Clone)]
struct Settings {
    root_url: Url,
    user_agent: String,
}

impl Settings {
    fn search_url(&self, kind: EntityKind, params: &SearchParams) -> String {
        format!(
            "{}{}?{}",
            self.root_url.as_str().trim_end_matches('/'),
            kind.endpoint(),
            params.encode()
        )
    }
}

/// Client for the MusicBrainz WS2 search endpoints.
///
/// Configuration lives in an immutable snapshot behind a lock, so searches can
/// run from several threads while a setter replaces the root or identity.
pub struct Ws2Client {
    settings: RwLock<Arc<Settings>>,
    http_client: ureq::Agent,
}

/// Parses and validates a WS2 root such as `https://musicbrainz.org/ws/2`.
pub fn parse_root_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| Ws2Error::InvalidRootAddress {
        address: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(invalid("expected an absolute base URL".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            "root address must not carry a query string or fragment".to_string(),
        ));
    }
    Ok(url)
}

fn warn_on_anonymous_identity(info: &ClientInfo) {
    if info.app_name.trim().is_empty() || info.contact.trim().is_empty() {
        warn!(
            "WS2 User-Agent '{}' lacks an application name or contact; MusicBrainz may throttle it",
            info.user_agent()
        );
    }
}

/// Pulls `<error><text>` messages out of a WS2 error body, or returns a snippet.
fn error_message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    if let Ok(root) = parse_document(trimmed) {
        if root.name == "error" {
            let messages: Vec<String> = root
                .children_named("text")
                .map(|text| text.text.trim().to_string())
                .filter(|text| !text.is_empty())
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
    }
    trimmed.chars().take(ERROR_BODY_SNIPPET_CHARS).collect()
}

fn status_error(url: &str, status: u16, response: ureq::Response) -> Ws2Error {
    let body = response.into_string().unwrap_or_default();
    let message = error_message_from_body(&body);
    warn!("WS2 GET {url} returned HTTP {status}: {message}");
    Ws2Error::UnexpectedStatus {
        url: url.to_string(),
        status,
        message,
    }
}

impl Ws2Client {
    /// Creates a client with the default HTTP agent.
    ///
    /// Fails with [`Ws2Error::InvalidRootAddress`] when `root_url` is not an
    /// absolute http(s) URL.
    pub fn new(root_url: &str, app_name: &str, version: &str, contact: &str) -> Result<Self> {
        let config = ClientConfig {
            root_url: root_url.to_string(),
            client: ClientInfo::new(app_name, version, contact),
            ..ClientConfig::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_agent(&config.root_url, &config.client, config.http.build_agent())
    }

    /// Creates a client around a caller-built agent, e.g. one with custom
    /// timeouts or a proxy.
    pub fn with_agent(
        root_url: &str,
        info: &ClientInfo,
        http_client: ureq::Agent,
    ) -> Result<Self> {
        let root_url = parse_root_url(root_url)?;
        warn_on_anonymous_identity(info);
        Ok(Self {
            settings: RwLock::new(Arc::new(Settings {
                root_url,
                user_agent: info.user_agent(),
            })),
            http_client,
        })
    }

    fn snapshot(&self) -> Arc<Settings> {
        let locked = match self.settings.read() {
            Ok(locked) => locked,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(&locked)
    }

    fn replace_settings(&self, update: impl FnOnce(&mut Settings)) {
        let mut locked = match self.settings.write() {
            Ok(locked) => locked,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = Settings::clone(&locked);
        update(&mut next);
        *locked = Arc::new(next);
    }

    pub fn root_url(&self) -> Url {
        self.snapshot().root_url.clone()
    }

    pub fn user_agent(&self) -> String {
        self.snapshot().user_agent.clone()
    }

    /// Replaces the root address. On error the previous address stays in place.
    pub fn set_root_url(&self, root_url: &str) -> Result<()> {
        let parsed = parse_root_url(root_url)?;
        self.replace_settings(|settings| settings.root_url = parsed);
        Ok(())
    }

    pub fn set_client_info(&self, app_name: &str, version: &str, contact: &str) {
        let info = ClientInfo::new(app_name, version, contact);
        warn_on_anonymous_identity(&info);
        let user_agent = info.user_agent();
        self.replace_settings(|settings| settings.user_agent = user_agent);
    }

    /// Full request URL for a search against the current root.
    pub fn search_url(&self, kind: EntityKind, params: &SearchParams) -> String {
        self.snapshot().search_url(kind, params)
    }

    fn fetch_body(&self, url: &str, user_agent: &str) -> Result<String> {
        debug!("WS2 GET {url}");
        let response = match self
            .http_client
            .get(url)
            .set("User-Agent", user_agent)
            .set("Accept", "application/xml")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                return Err(status_error(url, status, response));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(Ws2Error::Transport {
                    url: url.to_string(),
                    message: transport.to_string(),
                });
            }
        };

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(status_error(url, status, response));
        }

        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|err| Ws2Error::Transport {
                url: url.to_string(),
                message: format!("failed to read response: {err}"),
            })?;
        Ok(body)
    }

    /// Runs one search for entity type `E`.
    ///
    /// `limit` and `offset` equal to [`crate::query::OMIT_PARAM`] are left out
    /// of the request so the service applies its defaults.
    pub fn search<E: SearchEntity>(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<E>> {
        let kind = E::KIND;
        debug_assert!(kind.is_supported(), "{kind} has no search mapping");
        let settings = self.snapshot();
        let params = SearchParams::new(query, limit, offset);
        let url = settings.search_url(kind, &params);
        let body = self.fetch_body(&url, &settings.user_agent)?;

        let list = ScoredList::<E>::from_xml_str(&body).map_err(|source| {
            warn!("WS2 {} payload could not be decoded: {source}", kind.endpoint());
            Ws2Error::Decode {
                endpoint: kind.endpoint(),
                source,
            }
        })?;
        debug!(
            "WS2 {} returned {} entries (count={}, offset={})",
            kind.endpoint(),
            list.entries.len(),
            list.header.count,
            list.header.offset
        );
        Ok(list.into_response())
    }

    /// Searches annotations. Unqualified terms match the annotation text.
    pub fn search_annotation(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<Annotation>> {
        self.search(query, limit, offset)
    }

    /// Searches areas. Unqualified terms match the area name and sort name.
    pub fn search_area(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<Area>> {
        self.search(query, limit, offset)
    }

    /// Searches artists. Unqualified terms match name, sort name and aliases.
    pub fn search_artist(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<Artist>> {
        self.search(query, limit, offset)
    }

    /// Searches releases. Unqualified terms match the release title only.
    pub fn search_release(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<Release>> {
        self.search(query, limit, offset)
    }

    pub fn search_release_group(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<ReleaseGroup>> {
        self.search(query, limit, offset)
    }

    pub fn search_tag(&self, query: &str, limit: i64, offset: i64) -> Result<SearchResponse<Tag>> {
        self.search(query, limit, offset)
    }

    /// Searches CD stubs. Unqualified terms match the artist field.
    pub fn search_cdstub(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<CdStub>> {
        self.search(query, limit, offset)
    }

    /// Always fails with [`Ws2Error::NotImplemented`].
    pub fn search_freedb(
        &self,
        _query: &str,
        _limit: i64,
        _offset: i64,
    ) -> Result<SearchResponse<FreedbDisc>> {
        Err(Ws2Error::NotImplemented(EntityKind::Freedb.endpoint()))
    }

    pub fn search_label(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<Label>> {
        self.search(query, limit, offset)
    }

    /// Searches places. Unqualified terms match name, alias, address and area.
    pub fn search_place(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<SearchResponse<Place>> {
        self.search(query, limit, offset)
    }

    /// Always fails with [`Ws2Error::NotImplemented`].
    pub fn search_recording(
        &self,
        _query: &str,
        _limit: i64,
        _offset: i64,
    ) -> Result<SearchResponse<Recording>> {
        Err(Ws2Error::NotImplemented(EntityKind::Recording.endpoint()))
    }

    /// Always fails with [`Ws2Error::NotImplemented`].
    pub fn search_work(
        &self,
        _query: &str,
        _limit: i64,
        _offset: i64,
    ) -> Result<SearchResponse<Work>> {
        Err(Ws2Error::NotImplemented(EntityKind::Work.endpoint()))
    }
}
