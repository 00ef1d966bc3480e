mod nexus;
