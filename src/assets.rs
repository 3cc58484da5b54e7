//! Sprite acquisition from PokeAPI
//!
//! Resolves species names to loaded, drawable [`HtmlImageElement`] handles.
//! All fetches are issued concurrently and the catalog resolves only once
//! every slot has settled. Every failure mode (network, bad status, malformed
//! body, missing sprite field, image decode) substitutes the fixed fallback
//! sprite - asset trouble never blocks startup and never reaches the player.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};
use web_sys::{HtmlImageElement, Response};

use crate::consts::{ENEMY_SPECIES, PLAYER_SPECIES};

/// Served if a sprite lookup or decode fails for any reason
pub const FALLBACK_SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png";

const API_BASE: &str = "https://pokeapi.co/api/v2/pokemon";

type SpriteCache = Rc<RefCell<HashMap<String, HtmlImageElement>>>;

/// Loaded sprite handles, opaque to the sim and immutable after load.
pub struct SpriteCatalog {
    player: HtmlImageElement,
    enemies: Vec<HtmlImageElement>,
}

impl SpriteCatalog {
    /// Fetch and decode every required sprite concurrently.
    ///
    /// Resolves when all slots have settled; individual failures fall back
    /// rather than rejecting, so one slow or missing sprite cannot stall the
    /// Loading phase for the rest.
    pub async fn load() -> Result<Self, JsValue> {
        let cache: SpriteCache = Rc::new(RefCell::new(HashMap::new()));

        let slots = js_sys::Array::new();
        slots.push(&sprite_slot(cache.clone(), PLAYER_SPECIES.to_string()));
        for species in ENEMY_SPECIES {
            slots.push(&sprite_slot(cache.clone(), species.to_string()));
        }

        let settled = JsFuture::from(Promise::all(&slots)).await?;
        let settled: js_sys::Array = settled.dyn_into()?;

        let mut images = settled
            .iter()
            .map(|v| v.dyn_into::<HtmlImageElement>())
            .collect::<Result<Vec<_>, _>>()?;

        let player = images.remove(0);
        log::info!("sprite catalog ready ({} enemies)", images.len());
        Ok(Self {
            player,
            enemies: images,
        })
    }

    pub fn player(&self) -> &HtmlImageElement {
        &self.player
    }

    /// Enemy handle by spawner index; clamps so a stale index still draws.
    pub fn enemy(&self, index: usize) -> &HtmlImageElement {
        &self.enemies[index.min(self.enemies.len() - 1)]
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }
}

/// One eagerly-started load: species -> URL -> decoded image. Never rejects.
fn sprite_slot(cache: SpriteCache, species: String) -> Promise {
    future_to_promise(async move {
        if let Some(img) = cache.borrow().get(&species) {
            return Ok(img.clone().into());
        }
        let url = fetch_sprite_url(&species).await;
        let img = preload_image(&url).await;
        cache.borrow_mut().insert(species, img.clone());
        Ok(img.into())
    })
}

/// Look up a species' front sprite URL from PokeAPI.
///
/// Any failure returns [`FALLBACK_SPRITE_URL`] so gameplay is never blocked
/// by a missing sprite.
pub async fn fetch_sprite_url(species: &str) -> String {
    match try_fetch_sprite_url(species).await {
        Ok(url) => url,
        Err(err) => {
            log::warn!("sprite lookup failed for {species}: {err:?}, using fallback");
            FALLBACK_SPRITE_URL.to_string()
        }
    }
}

async fn try_fetch_sprite_url(species: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let url = format!("{API_BASE}/{species}");

    let resp_value = JsFuture::from(window.fetch_with_str(&url)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "{species} lookup returned HTTP {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))?;

    let body: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| JsValue::from_str(&format!("malformed response: {e}")))?;

    body["sprites"]["front_default"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| JsValue::from_str("no front_default sprite"))
}

/// Load and decode an image.
///
/// Decode failure gets the same catch-and-fallback treatment as the fetch:
/// retry once with the fallback URL, and if even that fails, resolve with the
/// bare element so startup never stalls on a single asset.
pub async fn preload_image(url: &str) -> HtmlImageElement {
    let first = try_preload(url).await;
    let retried = match first {
        Ok(img) => return img,
        Err(_) if url != FALLBACK_SPRITE_URL => {
            log::warn!("image decode failed for {url}, using fallback sprite");
            try_preload(FALLBACK_SPRITE_URL).await
        }
        Err(err) => Err(err),
    };
    retried.unwrap_or_else(|_| {
        log::warn!("fallback sprite failed to decode");
        HtmlImageElement::new().expect_throw("failed to create image element")
    })
}

async fn try_preload(url: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));

    let loaded = Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });

    img.set_src(url);
    JsFuture::from(loaded).await?;
    Ok(img)
}
