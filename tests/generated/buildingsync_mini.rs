// BuildingSync element types
//
// Generated by bsyncgen from the BuildingSync XML schema. Regenerate
// instead of editing by hand.

#![allow(non_camel_case_types)]
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::all)]

use std::fmt;

use bsyncgen::runtime as rt;

// LinkedPremises.Facility.LinkedFacilityID
/// `LinkedFacilityID` element
#[derive(Debug, Clone)]
pub struct LinkedFacilityID(rt::BsElement);

impl rt::BsType for LinkedFacilityID {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("LinkedFacilityID", "LinkedFacilityID")
                .attribute("IDref")
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl LinkedFacilityID {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }
}

impl Default for LinkedFacilityID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LinkedFacilityID> for rt::BsElement {
    fn from(value: LinkedFacilityID) -> Self {
        value.0
    }
}

impl fmt::Display for LinkedFacilityID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// LinkedPremises.Facility
/// `LinkedPremises.Facility` element
#[derive(Debug, Clone)]
pub struct LinkedPremises_Facility(rt::BsElement);

impl rt::BsType for LinkedPremises_Facility {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("LinkedPremises.Facility", "Facility")
                .child("LinkedFacilityID", rt::SpecLink::Static(<LinkedFacilityID as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl LinkedPremises_Facility {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `LinkedFacilityID` child
    pub fn add_linked_facility_id(&mut self, child: LinkedFacilityID) -> rt::Result<&mut Self> {
        self.0.add("LinkedFacilityID", child.0)?;
        Ok(self)
    }

    /// Set the single `LinkedFacilityID` child
    pub fn set_linked_facility_id(&mut self, child: LinkedFacilityID) -> rt::Result<&mut Self> {
        self.0.set_child("LinkedFacilityID", child.0)?;
        Ok(self)
    }

    /// Every `LinkedFacilityID` child, in supply order
    pub fn linked_facility_id(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("LinkedFacilityID")
    }
}

impl Default for LinkedPremises_Facility {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LinkedPremises_Facility> for rt::BsElement {
    fn from(value: LinkedPremises_Facility) -> Self {
        value.0
    }
}

impl fmt::Display for LinkedPremises_Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// LinkedPremises
/// `LinkedPremises` element
#[derive(Debug, Clone)]
pub struct LinkedPremises(rt::BsElement);

impl rt::BsType for LinkedPremises {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("LinkedPremises", "LinkedPremises")
                .child("Facility", rt::SpecLink::Static(<LinkedPremises_Facility as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl LinkedPremises {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `Facility` child
    pub fn add_facility(&mut self, child: LinkedPremises_Facility) -> rt::Result<&mut Self> {
        self.0.add("Facility", child.0)?;
        Ok(self)
    }

    /// Set the single `Facility` child
    pub fn set_facility(&mut self, child: LinkedPremises_Facility) -> rt::Result<&mut Self> {
        self.0.set_child("Facility", child.0)?;
        Ok(self)
    }

    /// Every `Facility` child, in supply order
    pub fn facility(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Facility")
    }
}

impl Default for LinkedPremises {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LinkedPremises> for rt::BsElement {
    fn from(value: LinkedPremises) -> Self {
        value.0
    }
}

impl fmt::Display for LinkedPremises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings.Building.PremisesName
/// `PremisesName` element
#[derive(Debug, Clone)]
pub struct PremisesName(rt::BsElement);

impl rt::BsType for PremisesName {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("PremisesName", "PremisesName")
                .scalar(rt::ScalarKind::String)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl PremisesName {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<PremisesName> for rt::BsElement {
    fn from(value: PremisesName) -> Self {
        value.0
    }
}

impl fmt::Display for PremisesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings.Building.YearOfConstruction
/// `YearOfConstruction` element
#[derive(Debug, Clone)]
pub struct YearOfConstruction(rt::BsElement);

impl rt::BsType for YearOfConstruction {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("YearOfConstruction", "YearOfConstruction")
                .scalar(rt::ScalarKind::GYear)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl YearOfConstruction {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<YearOfConstruction> for rt::BsElement {
    fn from(value: YearOfConstruction) -> Self {
        value.0
    }
}

impl fmt::Display for YearOfConstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings.Building.FloorsAboveGrade
/// `FloorsAboveGrade` element
#[derive(Debug, Clone)]
pub struct FloorsAboveGrade(rt::BsElement);

impl rt::BsType for FloorsAboveGrade {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("FloorsAboveGrade", "FloorsAboveGrade")
                .scalar(rt::ScalarKind::NonNegativeInteger)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl FloorsAboveGrade {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<FloorsAboveGrade> for rt::BsElement {
    fn from(value: FloorsAboveGrade) -> Self {
        value.0
    }
}

impl fmt::Display for FloorsAboveGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings.Building.RetrocommissioningDate
/// `RetrocommissioningDate` element
#[derive(Debug, Clone)]
pub struct RetrocommissioningDate(rt::BsElement);

impl rt::BsType for RetrocommissioningDate {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("RetrocommissioningDate", "RetrocommissioningDate")
                .scalar(rt::ScalarKind::Date)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl RetrocommissioningDate {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<RetrocommissioningDate> for rt::BsElement {
    fn from(value: RetrocommissioningDate) -> Self {
        value.0
    }
}

impl fmt::Display for RetrocommissioningDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// WeatherStationName
/// `WeatherStationName` element
#[derive(Debug, Clone)]
pub struct WeatherStationName(rt::BsElement);

impl rt::BsType for WeatherStationName {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("WeatherStationName", "WeatherStationName")
                .scalar(rt::ScalarKind::String)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl WeatherStationName {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<WeatherStationName> for rt::BsElement {
    fn from(value: WeatherStationName) -> Self {
        value.0
    }
}

impl fmt::Display for WeatherStationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// WeatherDataStationID
/// `WeatherDataStationID` element
#[derive(Debug, Clone)]
pub struct WeatherDataStationID(rt::BsElement);

impl rt::BsType for WeatherDataStationID {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("WeatherDataStationID", "WeatherDataStationID")
                .scalar(rt::ScalarKind::String)
                .attribute("IDref")
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl WeatherDataStationID {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<WeatherDataStationID> for rt::BsElement {
    fn from(value: WeatherDataStationID) -> Self {
        value.0
    }
}

impl fmt::Display for WeatherDataStationID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// StartTimestamp
/// `StartTimestamp` element
#[derive(Debug, Clone)]
pub struct StartTimestamp(rt::BsElement);

impl rt::BsType for StartTimestamp {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("StartTimestamp", "StartTimestamp")
                .scalar(rt::ScalarKind::DateTime)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl StartTimestamp {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<StartTimestamp> for rt::BsElement {
    fn from(value: StartTimestamp) -> Self {
        value.0
    }
}

impl fmt::Display for StartTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// OccupancyClassification
/// Principal use of the premises.
#[derive(Debug, Clone)]
pub struct OccupancyClassification(rt::BsElement);

impl rt::BsType for OccupancyClassification {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("OccupancyClassification", "OccupancyClassification")
                .doc("Principal use of the premises.")
                .scalar(rt::ScalarKind::String)
                .enumerations(["Office", "Retail", "Other"])
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl OccupancyClassification {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<OccupancyClassification> for rt::BsElement {
    fn from(value: OccupancyClassification) -> Self {
        value.0
    }
}

impl fmt::Display for OccupancyClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Year
/// `Year` element
#[derive(Debug, Clone)]
pub struct Year(rt::BsElement);

impl rt::BsType for Year {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Year", "Year")
                .scalar(rt::ScalarKind::GYear)
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Year {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<Year> for rt::BsElement {
    fn from(value: Year) -> Self {
        value.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Unknown
/// `Unknown` element
#[derive(Debug, Clone)]
pub struct Unknown(rt::BsElement);

impl rt::BsType for Unknown {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Unknown", "Unknown")
                .scalar(rt::ScalarKind::String)
                .enumerations(["Unknown"])
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Unknown {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<Unknown> for rt::BsElement {
    fn from(value: Unknown) -> Self {
        value.0
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Sites.Site
/// `Site` element
#[derive(Debug, Clone)]
pub struct Site(rt::BsElement);

impl rt::BsType for Site {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Site", "Site")
                .attribute("ID")
                .child("WeatherStationName", rt::SpecLink::Static(<WeatherStationName as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Site {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `WeatherStationName` child
    pub fn add_weather_station_name(&mut self, child: WeatherStationName) -> rt::Result<&mut Self> {
        self.0.add("WeatherStationName", child.0)?;
        Ok(self)
    }

    /// Set the single `WeatherStationName` child
    pub fn set_weather_station_name(&mut self, child: WeatherStationName) -> rt::Result<&mut Self> {
        self.0.set_child("WeatherStationName", child.0)?;
        Ok(self)
    }

    /// Every `WeatherStationName` child, in supply order
    pub fn weather_station_name(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("WeatherStationName")
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Site> for rt::BsElement {
    fn from(value: Site) -> Self {
        value.0
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Sites
/// `Sites` element
#[derive(Debug, Clone)]
pub struct Sites(rt::BsElement);

impl rt::BsType for Sites {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Sites", "Sites")
                .child("Site", rt::SpecLink::Static(<Site as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Sites {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `Site` child
    pub fn add_site(&mut self, child: Site) -> rt::Result<&mut Self> {
        self.0.add("Site", child.0)?;
        Ok(self)
    }

    /// Set the single `Site` child
    pub fn set_site(&mut self, child: Site) -> rt::Result<&mut Self> {
        self.0.set_child("Site", child.0)?;
        Ok(self)
    }

    /// Every `Site` child, in supply order
    pub fn site(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Site")
    }
}

impl Default for Sites {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Sites> for rt::BsElement {
    fn from(value: Sites) -> Self {
        value.0
    }
}

impl fmt::Display for Sites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings.Building.OccupancyClassification
/// `Building.OccupancyClassification` element
#[derive(Debug, Clone)]
pub struct Building_OccupancyClassification(rt::BsElement);

impl rt::BsType for Building_OccupancyClassification {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Building.OccupancyClassification", "OccupancyClassification")
                .base(<OccupancyClassification as rt::BsType>::spec())
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Building_OccupancyClassification {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<Building_OccupancyClassification> for rt::BsElement {
    fn from(value: Building_OccupancyClassification) -> Self {
        value.0
    }
}

impl fmt::Display for Building_OccupancyClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings.Building
/// `Building` element
#[derive(Debug, Clone)]
pub struct Building(rt::BsElement);

impl rt::BsType for Building {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Building", "Building")
                .attribute("ID")
                .child("PremisesName", rt::SpecLink::Static(<PremisesName as rt::BsType>::spec))
                .child("OccupancyClassification", rt::SpecLink::Static(<Building_OccupancyClassification as rt::BsType>::spec))
                .child("YearOfConstruction", rt::SpecLink::Static(<YearOfConstruction as rt::BsType>::spec))
                .child("FloorsAboveGrade", rt::SpecLink::Static(<FloorsAboveGrade as rt::BsType>::spec))
                .child("RetrocommissioningDate", rt::SpecLink::Static(<RetrocommissioningDate as rt::BsType>::spec))
                .child("WeatherDataStationID", rt::SpecLink::Static(<WeatherDataStationID as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Building {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `PremisesName` child
    pub fn add_premises_name(&mut self, child: PremisesName) -> rt::Result<&mut Self> {
        self.0.add("PremisesName", child.0)?;
        Ok(self)
    }

    /// Set the single `PremisesName` child
    pub fn set_premises_name(&mut self, child: PremisesName) -> rt::Result<&mut Self> {
        self.0.set_child("PremisesName", child.0)?;
        Ok(self)
    }

    /// Every `PremisesName` child, in supply order
    pub fn premises_name(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("PremisesName")
    }

    /// Append a `OccupancyClassification` child
    pub fn add_occupancy_classification(&mut self, child: Building_OccupancyClassification) -> rt::Result<&mut Self> {
        self.0.add("OccupancyClassification", child.0)?;
        Ok(self)
    }

    /// Set the single `OccupancyClassification` child
    pub fn set_occupancy_classification(&mut self, child: Building_OccupancyClassification) -> rt::Result<&mut Self> {
        self.0.set_child("OccupancyClassification", child.0)?;
        Ok(self)
    }

    /// Every `OccupancyClassification` child, in supply order
    pub fn occupancy_classification(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("OccupancyClassification")
    }

    /// Append a `YearOfConstruction` child
    pub fn add_year_of_construction(&mut self, child: YearOfConstruction) -> rt::Result<&mut Self> {
        self.0.add("YearOfConstruction", child.0)?;
        Ok(self)
    }

    /// Set the single `YearOfConstruction` child
    pub fn set_year_of_construction(&mut self, child: YearOfConstruction) -> rt::Result<&mut Self> {
        self.0.set_child("YearOfConstruction", child.0)?;
        Ok(self)
    }

    /// Every `YearOfConstruction` child, in supply order
    pub fn year_of_construction(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("YearOfConstruction")
    }

    /// Append a `FloorsAboveGrade` child
    pub fn add_floors_above_grade(&mut self, child: FloorsAboveGrade) -> rt::Result<&mut Self> {
        self.0.add("FloorsAboveGrade", child.0)?;
        Ok(self)
    }

    /// Set the single `FloorsAboveGrade` child
    pub fn set_floors_above_grade(&mut self, child: FloorsAboveGrade) -> rt::Result<&mut Self> {
        self.0.set_child("FloorsAboveGrade", child.0)?;
        Ok(self)
    }

    /// Every `FloorsAboveGrade` child, in supply order
    pub fn floors_above_grade(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("FloorsAboveGrade")
    }

    /// Append a `RetrocommissioningDate` child
    pub fn add_retrocommissioning_date(&mut self, child: RetrocommissioningDate) -> rt::Result<&mut Self> {
        self.0.add("RetrocommissioningDate", child.0)?;
        Ok(self)
    }

    /// Set the single `RetrocommissioningDate` child
    pub fn set_retrocommissioning_date(&mut self, child: RetrocommissioningDate) -> rt::Result<&mut Self> {
        self.0.set_child("RetrocommissioningDate", child.0)?;
        Ok(self)
    }

    /// Every `RetrocommissioningDate` child, in supply order
    pub fn retrocommissioning_date(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("RetrocommissioningDate")
    }

    /// Append a `WeatherDataStationID` child
    pub fn add_weather_data_station_id(&mut self, child: WeatherDataStationID) -> rt::Result<&mut Self> {
        self.0.add("WeatherDataStationID", child.0)?;
        Ok(self)
    }

    /// Set the single `WeatherDataStationID` child
    pub fn set_weather_data_station_id(&mut self, child: WeatherDataStationID) -> rt::Result<&mut Self> {
        self.0.set_child("WeatherDataStationID", child.0)?;
        Ok(self)
    }

    /// Every `WeatherDataStationID` child, in supply order
    pub fn weather_data_station_id(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("WeatherDataStationID")
    }
}

impl Default for Building {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Building> for rt::BsElement {
    fn from(value: Building) -> Self {
        value.0
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Buildings
/// `Buildings` element
#[derive(Debug, Clone)]
pub struct Buildings(rt::BsElement);

impl rt::BsType for Buildings {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Buildings", "Buildings")
                .child("Building", rt::SpecLink::Static(<Building as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Buildings {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `Building` child
    pub fn add_building(&mut self, child: Building) -> rt::Result<&mut Self> {
        self.0.add("Building", child.0)?;
        Ok(self)
    }

    /// Set the single `Building` child
    pub fn set_building(&mut self, child: Building) -> rt::Result<&mut Self> {
        self.0.set_child("Building", child.0)?;
        Ok(self)
    }

    /// Every `Building` child, in supply order
    pub fn building(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Building")
    }
}

impl Default for Buildings {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Buildings> for rt::BsElement {
    fn from(value: Buildings) -> Self {
        value.0
    }
}

impl fmt::Display for Buildings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// YearOrUnknown
/// `YearOrUnknown` element
#[derive(Debug, Clone)]
pub struct YearOrUnknown(rt::BsElement);

impl rt::BsType for YearOrUnknown {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("YearOrUnknown", "YearOrUnknown")
                .union_member(rt::SpecLink::Static(<Year as rt::BsType>::spec))
                .union_member(rt::SpecLink::Static(<Unknown as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl YearOrUnknown {
    /// Create an instance holding `value`
    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {
        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)
    }
}

impl From<YearOrUnknown> for rt::BsElement {
    fn from(value: YearOrUnknown) -> Self {
        value.0
    }
}

impl fmt::Display for YearOrUnknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Facilities.Facility
/// `Facilities.Facility` element
#[derive(Debug, Clone)]
pub struct Facilities_Facility(rt::BsElement);

impl rt::BsType for Facilities_Facility {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Facilities.Facility", "Facility")
                .attribute("ID")
                .child("Sites", rt::SpecLink::Static(<Sites as rt::BsType>::spec))
                .child("Buildings", rt::SpecLink::Static(<Buildings as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Facilities_Facility {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `Sites` child
    pub fn add_sites(&mut self, child: Sites) -> rt::Result<&mut Self> {
        self.0.add("Sites", child.0)?;
        Ok(self)
    }

    /// Set the single `Sites` child
    pub fn set_sites(&mut self, child: Sites) -> rt::Result<&mut Self> {
        self.0.set_child("Sites", child.0)?;
        Ok(self)
    }

    /// Every `Sites` child, in supply order
    pub fn sites(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Sites")
    }

    /// Append a `Buildings` child
    pub fn add_buildings(&mut self, child: Buildings) -> rt::Result<&mut Self> {
        self.0.add("Buildings", child.0)?;
        Ok(self)
    }

    /// Set the single `Buildings` child
    pub fn set_buildings(&mut self, child: Buildings) -> rt::Result<&mut Self> {
        self.0.set_child("Buildings", child.0)?;
        Ok(self)
    }

    /// Every `Buildings` child, in supply order
    pub fn buildings(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Buildings")
    }
}

impl Default for Facilities_Facility {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Facilities_Facility> for rt::BsElement {
    fn from(value: Facilities_Facility) -> Self {
        value.0
    }
}

impl fmt::Display for Facilities_Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Facilities
/// `Facilities` element
#[derive(Debug, Clone)]
pub struct Facilities(rt::BsElement);

impl rt::BsType for Facilities {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("Facilities", "Facilities")
                .child("Facility", rt::SpecLink::Static(<Facilities_Facility as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl Facilities {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `Facility` child
    pub fn add_facility(&mut self, child: Facilities_Facility) -> rt::Result<&mut Self> {
        self.0.add("Facility", child.0)?;
        Ok(self)
    }

    /// Set the single `Facility` child
    pub fn set_facility(&mut self, child: Facilities_Facility) -> rt::Result<&mut Self> {
        self.0.set_child("Facility", child.0)?;
        Ok(self)
    }

    /// Every `Facility` child, in supply order
    pub fn facility(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Facility")
    }
}

impl Default for Facilities {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Facilities> for rt::BsElement {
    fn from(value: Facilities) -> Self {
        value.0
    }
}

impl fmt::Display for Facilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// BuildingSync
/// Root element of a BuildingSync document.
#[derive(Debug, Clone)]
pub struct BuildingSync(rt::BsElement);

impl rt::BsType for BuildingSync {
    fn spec() -> &'static rt::SpecRef {
        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {
            rt::ElementSpec::builder("BuildingSync", "BuildingSync")
                .doc("Root element of a BuildingSync document.")
                .attribute("version")
                .child("Facilities", rt::SpecLink::Static(<Facilities as rt::BsType>::spec))
                .build()
        });
        &SPEC
    }

    fn wrap(element: rt::BsElement) -> Self {
        Self(element)
    }

    fn element(&self) -> &rt::BsElement {
        &self.0
    }

    fn element_mut(&mut self) -> &mut rt::BsElement {
        &mut self.0
    }

    fn into_element(self) -> rt::BsElement {
        self.0
    }
}

impl BuildingSync {
    /// Create an empty instance
    pub fn new() -> Self {
        <Self as rt::BsType>::empty()
    }

    /// Append a `Facilities` child
    pub fn add_facilities(&mut self, child: Facilities) -> rt::Result<&mut Self> {
        self.0.add("Facilities", child.0)?;
        Ok(self)
    }

    /// Set the single `Facilities` child
    pub fn set_facilities(&mut self, child: Facilities) -> rt::Result<&mut Self> {
        self.0.set_child("Facilities", child.0)?;
        Ok(self)
    }

    /// Every `Facilities` child, in supply order
    pub fn facilities(&self) -> rt::Result<&[rt::BsElement]> {
        self.0.children("Facilities")
    }
}

impl Default for BuildingSync {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BuildingSync> for rt::BsElement {
    fn from(value: BuildingSync) -> Self {
        value.0
    }
}

impl fmt::Display for BuildingSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub mod linked_premises {
    pub use super::LinkedPremises_Facility as Facility;
}
pub mod building {
    pub use super::Building_OccupancyClassification as OccupancyClassification;
}
pub mod facilities {
    pub use super::Facilities_Facility as Facility;
}
