use maud::{html, Markup};

use gpsdb_core::entities::*;

mod page;

use page::*;

pub fn index() -> Markup {
    page(
        "GPS Lookup",
        html! {
            div class="lookup" {
                h1 {"Address to GPS coordinates"}
                (street_address_form())
                h1 {"GPS coordinates to address"}
                (coordinates_form())
            }
        },
    )
}

fn street_address_form() -> Markup {
    html! {
        form action="/gps" method="POST" {
            label for="streetNumber" { "Street number" }
            input type="text" id="streetNumber" name="streetNumber" required;
            label for="streetName" { "Street name" }
            input type="text" id="streetName" name="streetName" required;
            label for="city" { "City" }
            input type="text" id="city" name="city" required;
            label for="stateProvince" { "State / Province" }
            input type="text" id="stateProvince" name="stateProvince" required;
            label for="country" { "Country" }
            input type="text" id="country" name="country" required;
            input class="btn" type="submit" value="Get GPS coordinates";
        }
    }
}

fn coordinates_form() -> Markup {
    html! {
        form action="/coord" method="POST" {
            label for="latitude" { "Latitude" }
            input type="text" id="latitude" name="latitude" placeholder="40.714224" required;
            label for="longitude" { "Longitude" }
            input type="text" id="longitude" name="longitude" placeholder="-73.961452" required;
            input class="btn" type="submit" value="Get address";
        }
    }
}

pub fn address_list(addresses: &[AddressRecord]) -> Markup {
    page(
        "All addresses",
        html! {
            h1 { "All addresses (" (addresses.len()) ")" }
            @if addresses.is_empty() {
                p { "No addresses have been stored yet." }
            } @else {
                table class="addresses" {
                    thead {
                        tr {
                            th { "Address" }
                            th { "Latitude" }
                            th { "Longitude" }
                            th { "Created" }
                            th {}
                        }
                    }
                    tbody {
                        @for r in addresses {
                            tr {
                                td { (r.address) }
                                td { (r.location.lat()) }
                                td { (r.location.lng()) }
                                td { (r.created_at) }
                                td {
                                    a class="delete" href=(format!("/all/{}", r.id)) { "delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn gps(address: &str, location: MapPoint) -> Markup {
    page(
        "GPS coordinates",
        html! {
            div class="result" {
                h1 { "GPS coordinates" }
                p class="address" { (address) }
                (position(location))
            }
        },
    )
}

pub fn address(address: &str, location: MapPoint) -> Markup {
    page(
        "Address",
        html! {
            div class="result" {
                h1 { "Address" }
                (position(location))
                p class="address" { (address) }
            }
        },
    )
}

fn position(location: MapPoint) -> Markup {
    html! {
        dl class="position" {
            dt { "Latitude" }
            dd class="lat" { (location.lat()) }
            dt { "Longitude" }
            dd class="lng" { (location.lng()) }
        }
    }
}

pub fn error(message: &str) -> Markup {
    page(
        "Error",
        html! {
            div class="error" {
                h1 { "Something went wrong" }
                p class="message" { (message) }
                a href="/" { "Try again" }
            }
        },
    )
}
