use maud::Markup;
use rocket::{
    self, catch, catchers,
    form::Form,
    get,
    http::Status,
    post,
    response::{content::RawCss, Redirect},
    routes,
    tokio::task,
    uri, Catcher, FromForm, Request, Route,
};

use gpsdb_core::usecases;

use super::{
    guards::{Db, GeoCoding},
    Error,
};

pub(crate) mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, Error>;

#[get("/")]
pub fn get_index() -> Markup {
    view::index()
}

#[get("/index.html")]
pub fn get_index_html() -> Markup {
    view::index()
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/all")]
pub fn get_all(db: Db) -> Result<Markup> {
    let addresses = usecases::load_addresses(&db.shared()?)?;
    Ok(view::address_list(&addresses))
}

#[get("/all/<id>")]
pub fn get_delete_address(db: Db, id: &str) -> Result<Redirect> {
    usecases::delete_address(&db.exclusive()?, id)?;
    Ok(Redirect::to(uri!(get_all)))
}

#[derive(FromForm)]
pub struct StreetAddressForm {
    #[field(name = "streetNumber")]
    street_number: Option<String>,
    #[field(name = "streetName")]
    street_name: Option<String>,
    city: Option<String>,
    #[field(name = "stateProvince")]
    state_province: Option<String>,
    country: Option<String>,
}

impl From<StreetAddressForm> for usecases::NewStreetAddress {
    fn from(from: StreetAddressForm) -> Self {
        let StreetAddressForm {
            street_number,
            street_name,
            city,
            state_province,
            country,
        } = from;
        Self {
            street_number,
            street_name,
            city,
            state_province,
            country,
        }
    }
}

#[derive(FromForm)]
pub struct CoordinatesForm {
    latitude: Option<String>,
    longitude: Option<String>,
}

impl From<CoordinatesForm> for usecases::NewCoordinates {
    fn from(from: CoordinatesForm) -> Self {
        let CoordinatesForm {
            latitude,
            longitude,
        } = from;
        Self {
            latitude,
            longitude,
        }
    }
}

// The upstream request is blocking and must not stall the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|err| Error::Other(err.into()))?
}

#[post("/gps", data = "<form>")]
pub async fn post_gps(
    db: Db,
    geo_gw: GeoCoding,
    form: Form<StreetAddressForm>,
) -> Result<Markup> {
    let new_address = usecases::NewStreetAddress::from(form.into_inner());
    let record = run_blocking(move || {
        Ok(usecases::geocode_address(&*db, &*geo_gw, &new_address)?)
    })
    .await?;
    Ok(view::gps(&record.address, record.location))
}

#[post("/coord", data = "<form>")]
pub async fn post_coord(
    db: Db,
    geo_gw: GeoCoding,
    form: Form<CoordinatesForm>,
) -> Result<Markup> {
    let new_coordinates = usecases::NewCoordinates::from(form.into_inner());
    let record = run_blocking(move || {
        Ok(usecases::reverse_geocode(&*db, &*geo_gw, &new_coordinates)?)
    })
    .await?;
    Ok(view::address(&record.address, record.location))
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_index_html,
        get_main_css,
        get_all,
        get_delete_address,
        post_gps,
        post_coord,
    ]
}

#[catch(default)]
fn default_catcher(status: Status, req: &Request<'_>) -> (Status, Markup) {
    log::warn!("{} {}: {status}", req.method(), req.uri());
    let message = match status.code {
        404 => "The requested page does not exist",
        415 | 422 => "The request could not be read as form data",
        _ => status.reason().unwrap_or("Unexpected error"),
    };
    (status, view::error(message))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}
